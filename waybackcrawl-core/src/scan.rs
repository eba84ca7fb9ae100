use crate::categorize::RuleTable;
use crate::results::ResultSet;
use futures::future;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;
use waybackcrawl_archive::{ArchiveClient, FetchError};

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Wayback API Error: {0}")]
    Fetch(#[from] FetchError),

    #[error("no archived URLs found")]
    NoUrls,

    #[error("categorization worker failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Options for configuring a scan run
pub struct ScanOptions {
    pub domain: String,
    pub workers: usize,
    pub index_url: Option<String>,
    pub show_progress: bool,
}

/// Callback for reporting scan progress
pub type ScanProgressCallback = Arc<dyn Fn(String) + Send + Sync>;

/// Callback ticked once per categorized URL
pub type TickCallback = Arc<dyn Fn() + Send + Sync>;

/// Execute a full scan: fetch the archive index, then categorize every URL.
///
/// Aborts with [`ScanError::NoUrls`] when the index has nothing for the
/// domain; nothing is written in that case.
pub async fn execute_scan(
    options: ScanOptions,
    progress: Option<ScanProgressCallback>,
) -> Result<ResultSet, ScanError> {
    let ScanOptions {
        domain,
        workers,
        index_url,
        show_progress,
    } = options;

    let mut client = ArchiveClient::new();
    if let Some(index_url) = index_url {
        client = client.with_index_url(index_url);
    }

    if let Some(ref callback) = progress {
        callback(format!(
            "Fetching URLs for {} from the Wayback Machine...",
            domain
        ));
    }

    let spinner = if show_progress {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .unwrap(),
        );
        pb.enable_steady_tick(Duration::from_millis(100));
        pb.set_message("Waiting on the archive index...");
        Some(pb)
    } else {
        None
    };

    let fetched = client.fetch_urls(&domain).await;

    if let Some(ref pb) = spinner {
        pb.finish_and_clear();
    }

    let urls = fetched?;
    if urls.is_empty() {
        return Err(ScanError::NoUrls);
    }

    if let Some(ref callback) = progress {
        callback(format!("Categorizing {} URLs...", urls.len()));
    }

    let bar = if show_progress {
        let pb = ProgressBar::new(urls.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{bar:40.cyan/blue} {pos}/{len} URLs")
                .unwrap(),
        );
        Some(pb)
    } else {
        None
    };

    let tick: Option<TickCallback> = bar.clone().map(|pb| -> TickCallback {
        Arc::new(move || pb.inc(1))
    });

    let table = Arc::new(RuleTable::builtin());
    let results = categorize_urls(urls, table, workers, tick).await?;

    if let Some(pb) = bar {
        pb.finish_and_clear();
    }

    Ok(results)
}

/// Categorize a URL list across a pool of worker tasks.
///
/// Fan-out/fan-in: the list is split into one contiguous chunk per worker,
/// each task classifies its chunk into a private [`ResultSet`], and the
/// partial sets are merged in chunk order. Classification is pure, so the
/// ordered merge is the only synchronization point and the output order is
/// identical to a sequential pass.
pub async fn categorize_urls(
    urls: Vec<String>,
    table: Arc<RuleTable>,
    workers: usize,
    tick: Option<TickCallback>,
) -> Result<ResultSet, ScanError> {
    let workers = workers.max(1);
    let chunk_size = urls.len().div_ceil(workers).max(1);

    let mut handles = Vec::new();
    for chunk in urls.chunks(chunk_size) {
        let chunk = chunk.to_vec();
        let table = table.clone();
        let tick = tick.clone();

        handles.push(tokio::spawn(async move {
            let mut partial = ResultSet::new();
            for url in chunk {
                let category = table.categorize(&url);
                partial.push(category, url);
                if let Some(ref tick) = tick {
                    tick();
                }
            }
            partial
        }));
    }

    debug!("Categorizing across {} workers", handles.len());

    let mut results = ResultSet::new();
    for partial in future::join_all(handles).await {
        results.merge(partial?);
    }

    Ok(results)
}
