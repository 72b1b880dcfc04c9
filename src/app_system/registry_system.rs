use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tracing::{error, info};

use crate::actor_framework::ResourceActor;
use crate::app_system::{Config, SystemError};
use crate::clients::{BookClient, EmployeeClient, UserClient};
use crate::domain::{Book, Employee, User};

/// The main application system: one store actor per record type.
///
/// Responsible for starting up the actors, wiring clients to them, and
/// joining the actor tasks on shutdown.
pub struct RegistrySystem {
    pub user_client: UserClient,
    pub employee_client: EmployeeClient,
    pub book_client: BookClient,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

fn sequential_ids() -> impl Fn() -> u64 + Send + Sync + 'static {
    let counter = Arc::new(AtomicU64::new(1));
    move || counter.fetch_add(1, Ordering::SeqCst)
}

impl RegistrySystem {
    pub fn new(config: &Config) -> Self {
        let (user_actor, user_resource_client) =
            ResourceActor::<User>::new(config.channel_buffer, sequential_ids());
        let user_client = UserClient::new(user_resource_client);
        let user_handle = tokio::spawn(user_actor.run());

        let (employee_actor, employee_resource_client) =
            ResourceActor::<Employee>::new(config.channel_buffer, sequential_ids());
        let employee_client = EmployeeClient::new(employee_resource_client);
        let employee_handle = tokio::spawn(employee_actor.run());

        let (book_actor, book_resource_client) =
            ResourceActor::<Book>::new(config.channel_buffer, sequential_ids());
        let book_client = BookClient::new(book_resource_client);
        let book_handle = tokio::spawn(book_actor.run());

        info!("Registry system started");
        Self {
            user_client,
            employee_client,
            book_client,
            handles: vec![user_handle, employee_handle, book_handle],
        }
    }

    /// Drops the clients (closing the actor mailboxes) and waits for every
    /// actor task to drain and exit.
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down registry system...");

        drop(self.user_client);
        drop(self.employee_client);
        drop(self.book_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Actor task failed");
                return Err(SystemError::ActorTaskFailed(e.to_string()));
            }
        }

        info!("Registry system shutdown complete");
        Ok(())
    }
}
