use crate::app::commands::registries;
use crate::domain::AppError;

pub fn run_registries() -> Result<(), AppError> {
    for profile in registries::list() {
        let marker = if profile.recommended { " (recommended)" } else { "" };
        println!("{}{}", profile.id, marker);
        println!("  {}: {}", profile.name, profile.description);
        println!("  {}", profile.network_advice);
        println!("  image: {}", profile.app_image("<tag>"));
    }
    Ok(())
}
