//! Runtime bridge between the UI command queue and the remote user store.
//!
//! One worker thread owns a tokio runtime and the HTTP client. Commands are
//! processed strictly in order, one store call at a time; results come back
//! as [`UiEvent`]s for the UI thread to fold into its view state.

use std::thread;

use client_core::{HttpUserStore, UserStore};
use crossbeam_channel::{Receiver, Sender};
use tracing::{error, info};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};

pub fn launch(server_url: String, cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                    UiErrorContext::BackendStartup,
                    format!("backend worker startup failure: failed to build runtime: {err}"),
                )));
                error!("failed to build backend runtime: {err}");
                return;
            }
        };

        let store = HttpUserStore::new(server_url);
        runtime.block_on(run_worker(&store, cmd_rx, ui_tx));
    });
}

async fn run_worker(
    store: &impl UserStore,
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
) {
    while let Ok(cmd) = cmd_rx.recv() {
        match cmd {
            BackendCommand::LoadUsers => {
                info!("backend: load_users");
                match store.list_users().await {
                    Ok(users) => {
                        let _ = ui_tx.try_send(UiEvent::UsersLoaded(users));
                    }
                    // List failures stay off-screen: log and leave the
                    // current list untouched.
                    Err(err) => error!("backend: load_users failed: {err}"),
                }
            }
            BackendCommand::CreateUser { draft } => {
                info!("backend: create_user");
                match store.create_user(&draft).await {
                    Ok(record) => {
                        let _ = ui_tx.try_send(UiEvent::UserCreated(record));
                    }
                    Err(err) => {
                        error!("backend: create_user failed: {err}");
                        let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                            UiErrorContext::CreateUser,
                            err.to_string(),
                        )));
                    }
                }
            }
            BackendCommand::UpdateUser { id, draft } => {
                info!(user_id = id.0, "backend: update_user");
                match store.update_user(id, &draft).await {
                    Ok(record) => {
                        let _ = ui_tx.try_send(UiEvent::UserUpdated(record));
                    }
                    Err(err) => {
                        error!(user_id = id.0, "backend: update_user failed: {err}");
                        let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                            UiErrorContext::UpdateUser,
                            err.to_string(),
                        )));
                    }
                }
            }
            BackendCommand::DeleteUser { id } => {
                info!(user_id = id.0, "backend: delete_user");
                match store.delete_user(id).await {
                    Ok(()) => {
                        let _ = ui_tx.try_send(UiEvent::UserDeleted(id));
                    }
                    Err(err) => {
                        error!(user_id = id.0, "backend: delete_user failed: {err}");
                        let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                            UiErrorContext::DeleteUser,
                            err.to_string(),
                        )));
                    }
                }
            }
        }
    }
}
