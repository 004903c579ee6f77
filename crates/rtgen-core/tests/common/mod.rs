#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

use rtgen_core::{FileSystem, Host, Notification};

/// In-memory file system; writes can be held open until released.
#[derive(Clone, Default)]
pub struct MemoryFileSystem {
    files: Arc<Mutex<HashMap<PathBuf, String>>>,
    write_gate: Option<Arc<Notify>>,
    fail_writes: bool,
}

impl MemoryFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(self, path: impl Into<PathBuf>, content: &str) -> Self {
        self.files.lock().unwrap().insert(path.into(), content.to_string());
        self
    }

    /// Every write waits for `gate` to be notified.
    pub fn with_write_gate(mut self, gate: Arc<Notify>) -> Self {
        self.write_gate = Some(gate);
        self
    }

    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    pub fn get(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files.lock().unwrap().get(path.as_ref()).cloned()
    }
}

#[async_trait]
impl FileSystem for MemoryFileSystem {
    async fn read_to_string(&self, path: &Path) -> io::Result<String> {
        self.get(path)
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such file"))
    }

    async fn exists(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains_key(path)
    }

    async fn write(&self, path: &Path, content: &str) -> io::Result<()> {
        if let Some(gate) = &self.write_gate {
            gate.notified().await;
        }
        if self.fail_writes {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only"));
        }
        self.files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), content.to_string());
        Ok(())
    }
}

/// Host that answers overwrite prompts with a fixed value and records notifications.
#[derive(Default)]
pub struct RecordingHost {
    pub allow_overwrite: bool,
    pub prompts: Mutex<Vec<PathBuf>>,
    pub notifications: Mutex<Vec<Notification>>,
}

impl RecordingHost {
    pub fn allowing_overwrite() -> Self {
        Self {
            allow_overwrite: true,
            ..Self::default()
        }
    }

    pub fn messages(&self) -> Vec<String> {
        self.notifications
            .lock()
            .unwrap()
            .iter()
            .map(|n| n.message.clone())
            .collect()
    }
}

#[async_trait]
impl Host for RecordingHost {
    async fn confirm_overwrite(&self, path: &Path) -> bool {
        self.prompts.lock().unwrap().push(path.to_path_buf());
        self.allow_overwrite
    }

    fn notify(&self, notification: Notification) {
        self.notifications.lock().unwrap().push(notification);
    }
}

pub const CARD_SOURCE: &str = r#"import React, { useState } from "react"
import { Button, formatDate } from "../components/ui"
import * as api from "../lib/api"
import Avatar from "./Avatar"
import { render } from "@testing-library/react"
import type { CardProps } from "./types"
import "./Card.css"

export default function Card({ title }: CardProps) {
    const [open, setOpen] = useState(false)
    return <Button onClick={() => setOpen(!open)}>{formatDate(title)}</Button>
}
"#;
