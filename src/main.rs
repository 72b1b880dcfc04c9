mod actor_framework;
mod app_system;
mod book_actor;
mod clients;
mod domain;
mod employee_actor;
mod interest;
mod patch;
mod user_actor;

#[cfg(test)]
mod mock_framework;
#[cfg(test)]
mod patch_properties;

use serde_json::{json, Map, Value};
use tracing::{error, info, Instrument};

use crate::app_system::{setup_tracing, Config, RegistrySystem};
use crate::domain::{BookCreate, EmployeeCreate, UserCreate};
use crate::interest::InterestService;

fn payload(value: Value) -> Map<String, Value> {
    value.as_object().cloned().unwrap_or_default()
}

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting record registry");
    let config = Config::load();
    let system = RegistrySystem::new(&config);

    let span = tracing::info_span!("user_flow");
    async {
        info!("Creating test user");
        let id = system
            .user_client
            .create_user(UserCreate {
                name: "Ann".to_string(),
                email: "ann@x.com".to_string(),
                age: 30,
            })
            .await
            .map_err(|e| e.to_string())?;
        info!(user_id = %id, "User created");

        let updated = system
            .user_client
            .patch_user(id, payload(json!({ "age": 31 })))
            .await
            .map_err(|e| e.to_string())?;
        info!(age = updated.age, "User patched");

        // A payload naming the identity is rejected at the boundary.
        match system.user_client.patch_user(id, payload(json!({ "id": 2 }))).await {
            Ok(_) => error!("Identity patch unexpectedly accepted"),
            Err(e) => info!(error = %e, "Identity patch rejected"),
        }
        Ok::<(), String>(())
    }
    .instrument(span)
    .await?;

    let span = tracing::info_span!("employee_flow");
    async {
        info!("Creating test employee");
        let id = system
            .employee_client
            .create_employee(EmployeeCreate {
                first_name: "Bob".to_string(),
                last_name: "Stone".to_string(),
                email: "bob@corp.example".to_string(),
            })
            .await
            .map_err(|e| e.to_string())?;

        let updated = system
            .employee_client
            .patch_employee(id, payload(json!({ "email": "bstone@corp.example" })))
            .await
            .map_err(|e| e.to_string())?;
        info!(email = %updated.email, "Employee patched");
        Ok::<(), String>(())
    }
    .instrument(span)
    .await?;

    let span = tracing::info_span!("book_flow");
    async {
        info!("Creating test book");
        let id = system
            .book_client
            .create_book(BookCreate {
                title: "Refactoring".to_string(),
                author: Some("Martin Fowler".to_string()),
                published: None,
            })
            .await
            .map_err(|e| e.to_string())?;

        let updated = system
            .book_client
            .patch_book(id, payload(json!({ "published": "1999-07-08", "author": null })))
            .await
            .map_err(|e| e.to_string())?;
        info!(title = %updated.title, published = ?updated.published, "Book patched");
        Ok::<(), String>(())
    }
    .instrument(span)
    .await?;

    let interest = InterestService::from_config(&config);
    info!(rate = interest.rate(), "Interest service configured");
    info!("{}", interest.summary(1000.0, 2));

    system.shutdown().await.map_err(|e| e.to_string())?;

    info!("Application completed successfully");
    Ok(())
}
