pub mod auth;
pub mod invites;
pub mod members;
pub mod projects;
pub mod tasks;
pub mod users;
pub mod workspaces;

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::state::SharedState;

pub fn api_routes() -> Router<SharedState> {
    Router::new()
        // Auth
        .route("/signup", post(auth::signup))
        .route("/login", post(auth::login))
        // Workspaces
        .route("/createWorkspace", post(workspaces::create))
        .route("/userWorkSpaces", get(workspaces::list_for_user))
        // Invites
        .route("/invite", post(invites::create))
        // Users
        .route("/api/users", get(users::list))
        .route("/users/{user_id}", get(users::get))
        .route("/user", put(users::update))
        .route("/update-user", put(users::update_by_email))
        // Team members
        .route("/teamMembers", post(members::list))
        .route("/editmember", put(members::edit))
        .route("/deleteUser", post(members::remove))
        // Tasks
        .route("/addTask", post(tasks::create))
        .route("/getTasks", post(tasks::list))
        .route("/deletetask", delete(tasks::remove))
        .route("/movetask", put(tasks::move_status))
        // Projects
        .route("/addProject", post(projects::create))
        .route("/getProject", post(projects::list))
}
