pub mod invites;
pub mod memberships;
pub mod projects;
pub mod tasks;
pub mod users;
pub mod workspaces;
