use crate::features::WineFeatures;
use crate::predict::{ModelKind, PredictClient, PredictError, PredictionResult};
use std::{
    sync::mpsc::{Receiver, Sender},
    thread,
};

type TryRecvError = std::sync::mpsc::TryRecvError;

pub(crate) enum JobMessage {
    PredictionFinished(PredictionJobResult),
}

#[derive(Debug)]
pub(crate) struct PredictionJob {
    pub(crate) model: ModelKind,
    pub(crate) endpoint: String,
    pub(crate) features: WineFeatures,
}

#[derive(Debug)]
pub(crate) struct PredictionJobResult {
    pub(crate) model: ModelKind,
    pub(crate) result: Result<PredictionResult, PredictError>,
}

/// Runs blocking requests off the UI thread and queues their results.
pub(crate) struct ControllerJobs {
    message_tx: Sender<JobMessage>,
    message_rx: Receiver<JobMessage>,
}

impl ControllerJobs {
    pub(super) fn new() -> Self {
        let (message_tx, message_rx) = std::sync::mpsc::channel::<JobMessage>();
        Self {
            message_tx,
            message_rx,
        }
    }

    pub(super) fn try_recv_message(&self) -> Result<JobMessage, TryRecvError> {
        self.message_rx.try_recv()
    }

    pub(super) fn begin_prediction(&self, client: PredictClient, job: PredictionJob) {
        let tx = self.message_tx.clone();
        thread::spawn(move || {
            let result = client.predict(job.model, &job.endpoint, &job.features);
            let _ = tx.send(JobMessage::PredictionFinished(PredictionJobResult {
                model: job.model,
                result,
            }));
        });
    }
}
