use betafold::engine::progress::{Progress, ProgressCallback};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressState, ProgressStyle};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::warn;

const BAR_TICK_MS: u64 = 120;

/// Record-level progress bar shared by every worker of a multi-record run.
#[derive(Clone)]
pub struct CliProgressHandler {
    pb: Arc<Mutex<ProgressBar>>,
}

impl CliProgressHandler {
    pub fn new(total_records: u64, hidden: bool) -> Self {
        let pb = ProgressBar::new(total_records)
            .with_style(Self::bar_style())
            .with_message("Starting...");
        if hidden {
            pb.set_draw_target(ProgressDrawTarget::hidden());
        } else {
            pb.set_draw_target(ProgressDrawTarget::stderr());
            pb.enable_steady_tick(Duration::from_millis(BAR_TICK_MS));
        }

        Self {
            pb: Arc::new(Mutex::new(pb)),
        }
    }

    /// Callback for the workflow of one record; phase names are prefixed with `record`.
    pub fn callback_for(&self, record: &str) -> ProgressCallback<'static> {
        let pb_clone = self.pb.clone();
        let record = record.to_string();

        Box::new(move |progress: Progress| {
            let Ok(pb_guard) = pb_clone.lock() else {
                warn!("Progress bar mutex was poisoned. Cannot update progress.");
                return;
            };

            match progress {
                Progress::PhaseStart { name } => {
                    pb_guard.set_message(format!("{record}: {name}"));
                }
                Progress::PhaseFinish => {}
                Progress::Message(msg) => {
                    pb_guard.println(format!("  {record}: {msg}"));
                }
            }
        })
    }

    pub fn record_finished(&self) {
        if let Ok(pb_guard) = self.pb.lock() {
            pb_guard.inc(1);
        }
    }

    pub fn finish(&self) {
        if let Ok(pb_guard) = self.pb.lock() {
            pb_guard.disable_steady_tick();
            pb_guard.finish_with_message("✓ Done");
        }
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::with_template("{msg:<32} [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .with_key(
                "eta",
                |state: &ProgressState, w: &mut dyn std::fmt::Write| {
                    let _ = write!(w, "{:.1}s", state.eta().as_secs_f64());
                },
            )
            .progress_chars("##-")
    }
}
