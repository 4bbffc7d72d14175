//! Thin CLI entry: load config, pull one pipeline snapshot, log the
//! funnel. Mostly useful as a smoke check against a configured store.

use chrono::Utc;

use dealflow::config::load_config;
use dealflow::services::dashboard::load_snapshot;
use dealflow::AppState;

#[tokio::main]
async fn main() {
    env_logger::init();

    let config = match load_config() {
        Ok(c) => c,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };

    let state = AppState::new(config);
    match load_snapshot(&state, Utc::now()).await {
        Ok(snap) => {
            let f = &snap.funnel;
            log::info!(
                "pipeline: {} jobs | inbound {}/{}/{}/{} | building {}+{} | outreach {}+{} | closing {}/{}/{}/{}",
                snap.job_count,
                f.new,
                f.pending_approval,
                f.approved,
                f.rejected,
                f.building,
                f.deployed,
                f.messaged,
                f.follow_ups,
                f.light_engagement,
                f.engaged,
                f.closed_won,
                f.closed_lost,
            );
        }
        Err(e) => {
            log::error!("snapshot failed: {}", e);
            std::process::exit(1);
        }
    }
}
