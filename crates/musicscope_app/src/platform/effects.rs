use std::sync::{mpsc, Arc};
use std::thread;

use musicscope_core::{Effect, Failure, Msg};
use musicscope_engine::{
    ChannelEventSink, ClientSettings, EngineEvent, EngineHandle, ReqwestAnalyticsClient,
};
use musicscope_logging::{scope_debug, scope_info};

use super::ui::commands::Command;

pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(settings: ClientSettings, cmd_tx: mpsc::Sender<Command>) -> anyhow::Result<Self> {
        scope_info!(
            "Analytics service at {} (timeout {:?})",
            settings.base_url,
            settings.request_timeout
        );
        let client = ReqwestAnalyticsClient::new(settings)?;
        let (event_tx, event_rx) = mpsc::channel();
        let engine = EngineHandle::new(
            Arc::new(client),
            Arc::new(ChannelEventSink::new(event_tx)),
        )?;
        spawn_event_loop(event_rx, cmd_tx);
        Ok(Self { engine })
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::LoadAll {
                    generation,
                    primary,
                    comparison,
                } => {
                    scope_debug!(
                        "LoadAll generation={} primary={} comparison={}",
                        generation,
                        primary,
                        comparison
                    );
                    self.engine.load_all(generation, primary, comparison);
                }
                Effect::RunEtl { job, request } => {
                    self.engine.run_etl(job, request);
                }
            }
        }
    }
}

fn spawn_event_loop(event_rx: mpsc::Receiver<EngineEvent>, cmd_tx: mpsc::Sender<Command>) {
    thread::spawn(move || {
        while let Ok(event) = event_rx.recv() {
            if cmd_tx.send(Command::Dispatch(map_event(event))).is_err() {
                break;
            }
        }
    });
}

pub(crate) fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::FetchSetLoaded { generation, result } => Msg::FetchSetLoaded {
            generation,
            result: result.map_err(Failure::from),
        },
        EngineEvent::EtlCompleted { job, result } => Msg::EtlFinished {
            job,
            result: result.map_err(Failure::from),
        },
    }
}
