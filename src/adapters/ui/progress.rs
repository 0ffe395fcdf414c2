//! Loading indicator. An indicatif spinner shown while a screen's loading flag is set.

use indicatif::{ProgressBar, ProgressStyle};
use std::future::Future;
use std::time::Duration;

fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

/// Run `fut` with a spinner labelled `message`; the spinner is cleared on settlement.
pub async fn while_loading<F: Future>(message: &str, fut: F) -> F::Output {
    let pb = spinner(message);
    let out = fut.await;
    pb.finish_and_clear();
    out
}
