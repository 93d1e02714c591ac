//! Shared helpers for linkage integration tests.
#![allow(dead_code)]

use std::sync::Mutex;

use sqlx::PgPool;

use hostlink_core::types::DbId;
use hostlink_db::models::application::{Application, CreateApplication};
use hostlink_db::models::host::{CreateHost, Host, HostStatus};
use hostlink_db::models::item::{CreateItem, Item};
use hostlink_db::models::trigger::{CreateTrigger, Trigger};
use hostlink_db::notify::Notifier;
use hostlink_db::repositories::{ApplicationRepo, HostRepo, ItemRepo, TriggerRepo};

/// Notifier that captures messages for assertions.
#[derive(Default)]
pub struct CapturingNotifier {
    messages: Mutex<Vec<String>>,
}

impl CapturingNotifier {
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl Notifier for CapturingNotifier {
    fn info(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

pub async fn monitored_host(pool: &PgPool, name: &str) -> Host {
    HostRepo::create(
        pool,
        &CreateHost {
            name: name.to_string(),
            status: HostStatus::Monitored,
        },
    )
    .await
    .expect("host should insert")
}

pub async fn template(pool: &PgPool, name: &str) -> Host {
    HostRepo::create(
        pool,
        &CreateHost {
            name: name.to_string(),
            status: HostStatus::Template,
        },
    )
    .await
    .expect("template should insert")
}

pub async fn item(pool: &PgPool, host_id: DbId, key: &str) -> Item {
    ItemRepo::create(
        pool,
        &CreateItem {
            host_id,
            key: key.to_string(),
            name: key.to_string(),
        },
    )
    .await
    .expect("item should insert")
}

pub async fn application(pool: &PgPool, host_id: DbId, name: &str) -> Application {
    ApplicationRepo::create(
        pool,
        &CreateApplication {
            host_id,
            name: name.to_string(),
        },
    )
    .await
    .expect("application should insert")
}

pub async fn trigger(pool: &PgPool, description: &str, item_ids: &[DbId]) -> Trigger {
    TriggerRepo::create(
        pool,
        &CreateTrigger {
            description: description.to_string(),
            item_ids: item_ids.to_vec(),
        },
    )
    .await
    .expect("trigger should insert")
}
