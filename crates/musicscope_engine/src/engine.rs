use std::sync::{mpsc, Arc};
use std::thread;

use musicscope_core::{CanonicalKey, EtlJob, EtlRequest, Generation};

use crate::coordinator::{load_all, run_etl};
use crate::{AnalyticsService, EngineEvent};

enum EngineCommand {
    Load {
        generation: Generation,
        primary: CanonicalKey,
        comparison: CanonicalKey,
    },
    RunEtl {
        job: EtlJob,
        request: EtlRequest,
    },
}

/// Receives engine events, possibly from several runtime workers at once.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: EngineEvent);
}

pub struct ChannelEventSink {
    tx: mpsc::Sender<EngineEvent>,
}

impl ChannelEventSink {
    pub fn new(tx: mpsc::Sender<EngineEvent>) -> Self {
        Self { tx }
    }
}

impl EventSink for ChannelEventSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(event);
    }
}

/// Executes loads and ETL triggers on a background tokio runtime.
///
/// Commands never block the caller. Every command ends in exactly one event.
/// The engine does not cancel superseded loads; their events still arrive
/// and are filtered by generation on the receiving side.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    pub fn new(
        service: Arc<dyn AnalyticsService>,
        sink: Arc<dyn EventSink>,
    ) -> std::io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?;
        let (cmd_tx, cmd_rx) = mpsc::channel();

        thread::Builder::new()
            .name("musicscope-engine".to_string())
            .spawn(move || {
                while let Ok(command) = cmd_rx.recv() {
                    let service = service.clone();
                    let sink = sink.clone();
                    runtime.spawn(async move {
                        handle_command(service.as_ref(), command, sink.as_ref()).await;
                    });
                }
            })?;

        Ok(Self { cmd_tx })
    }

    pub fn load_all(&self, generation: Generation, primary: CanonicalKey, comparison: CanonicalKey) {
        let _ = self.cmd_tx.send(EngineCommand::Load {
            generation,
            primary,
            comparison,
        });
    }

    pub fn run_etl(&self, job: EtlJob, request: EtlRequest) {
        let _ = self.cmd_tx.send(EngineCommand::RunEtl { job, request });
    }
}

async fn handle_command(service: &dyn AnalyticsService, command: EngineCommand, sink: &dyn EventSink) {
    match command {
        EngineCommand::Load {
            generation,
            primary,
            comparison,
        } => {
            let result = load_all(service, &primary, &comparison).await;
            sink.emit(EngineEvent::FetchSetLoaded { generation, result });
        }
        EngineCommand::RunEtl { job, request } => {
            let result = run_etl(service, job, &request).await;
            sink.emit(EngineEvent::EtlCompleted { job, result });
        }
    }
}
