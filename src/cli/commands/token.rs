use crate::auth::{generate_jwt, Claims};
use crate::items::ItemPermission;

pub fn handle(
    subject: String,
    permissions: Vec<ItemPermission>,
    expires_in_hours: Option<i64>,
) -> anyhow::Result<()> {
    let claims = claims_for(subject, &permissions, expires_in_hours)?;
    let token = generate_jwt(&claims)?;
    println!("{}", token);
    Ok(())
}

fn claims_for(
    subject: String,
    permissions: &[ItemPermission],
    expires_in_hours: Option<i64>,
) -> anyhow::Result<Claims> {
    let granted: Vec<String> = permissions.iter().map(|p| p.as_str().to_string()).collect();

    let claims = match expires_in_hours {
        Some(hours) => Claims::with_expiry_hours(subject, granted, hours)?,
        None => Claims::new(subject, granted)?,
    };
    Ok(claims)
}
