//! Wall-clock header. The periodic tick only redraws the timestamp.

use std::{future::Future, time::Duration};

use chrono::{DateTime, Local};
use tokio::time::{interval, MissedTickBehavior};
use tracing::info;

pub const TICK_INTERVAL: Duration = Duration::from_secs(60);

pub fn header(title: &str, now: DateTime<Local>) -> String {
    format!("== {title} ==  (last updated {})", now.format("%Y-%m-%d %H:%M"))
}

/// Redraws once per tick until `stop` resolves. Never refetches page data.
pub async fn redraw_every_tick<F, S>(mut draw: F, stop: S)
where
    F: FnMut(DateTime<Local>),
    S: Future<Output = ()>,
{
    let mut ticker = interval(TICK_INTERVAL);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    tokio::pin!(stop);
    loop {
        tokio::select! {
            _ = ticker.tick() => draw(Local::now()),
            _ = &mut stop => {
                info!("watch stopped");
                return;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use chrono::TimeZone;

    use super::*;

    #[test]
    fn header_shows_minute_resolution() {
        let now = Local
            .with_ymd_and_hms(2024, 3, 9, 14, 5, 59)
            .single()
            .expect("unambiguous local time");
        assert_eq!(
            header("Inbound shipments", now),
            "== Inbound shipments ==  (last updated 2024-03-09 14:05)"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn first_tick_draws_immediately_then_once_per_minute() {
        let draws = Cell::new(0);
        redraw_every_tick(
            |_| draws.set(draws.get() + 1),
            tokio::time::sleep(TICK_INTERVAL * 2 + Duration::from_secs(1)),
        )
        .await;
        assert_eq!(draws.get(), 3);
    }
}
