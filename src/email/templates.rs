pub fn render_invitation(workspace_name: &str, invite_link: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"></head>
<body style="font-family: sans-serif; max-width: 600px; margin: 0 auto; padding: 20px;">
    <h3>Hello,</h3>
    <p>You have been invited to join the workspace <strong>{workspace_name}</strong>.</p>
    <p><a href="{invite_link}" style="display: inline-block; padding: 10px 20px; background: #0070f3; color: white; text-decoration: none; border-radius: 4px;">Join Workspace</a></p>
    <p style="color: #666; font-size: 14px;">If you did not expect this invitation, please ignore this email.</p>
</body>
</html>"#
    )
}
