use super::client::{ClientError, ContentClient};
use super::schema::{Algorithm, Category, Example};
use crate::registry::{ContentSource, Topic};
use std::sync::mpsc::{channel, Receiver};
use std::thread;
use tokio::sync::mpsc::{unbounded_channel, UnboundedSender};

/// What a topic page needs from the backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContentRequest {
    /// A data-structure category and its examples
    Examples { slug: String },
    /// An algorithm family (`sorting`) and the algorithms in it
    AlgorithmGroup { slug: String },
    /// A single algorithm (`sorting/quick-sort` asks for `quick-sort`)
    Algorithm { slug: String },
}

impl ContentRequest {
    pub fn for_topic(topic: &Topic) -> Option<Self> {
        match topic.content? {
            ContentSource::Examples => Some(Self::Examples {
                slug: topic.slug.clone(),
            }),
            ContentSource::Algorithms => match topic.slug.rsplit_once('/') {
                Some((_, leaf)) => Some(Self::Algorithm {
                    slug: leaf.to_string(),
                }),
                None => Some(Self::AlgorithmGroup {
                    slug: topic.slug.clone(),
                }),
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum PageContent {
    Examples {
        category: Category,
        examples: Vec<Example>,
    },
    AlgorithmGroup {
        category: Category,
        algorithms: Vec<Algorithm>,
    },
    Algorithm(Algorithm),
}

pub async fn load_content(
    client: &ContentClient,
    request: &ContentRequest,
) -> Result<PageContent, ClientError> {
    match request {
        ContentRequest::Examples { slug } => {
            let category = client.fetch_category_by_slug(slug).await?;
            let examples = client.fetch_examples(Some(category.id)).await?;
            Ok(PageContent::Examples { category, examples })
        }
        ContentRequest::AlgorithmGroup { slug } => {
            let category = client.fetch_category_by_slug(slug).await?;
            let algorithms = client.fetch_algorithms(Some(slug)).await?;
            Ok(PageContent::AlgorithmGroup {
                category,
                algorithms,
            })
        }
        ContentRequest::Algorithm { slug } => {
            let algorithm = client.fetch_algorithm_by_slug(slug).await?;
            Ok(PageContent::Algorithm(algorithm))
        }
    }
}

#[derive(Debug)]
pub enum IoCommand {
    LoadPage {
        route: String,
        request: ContentRequest,
    },
}

pub enum IoResult {
    /// Tagged with the route that asked, so late answers can be told apart
    PageLoaded {
        route: String,
        result: Result<PageContent, String>,
    },
    Error(String),
}

/// Starts the content loader thread. Each page load runs as its own task, so a
/// backend that never answers one route does not hold up the next.
pub fn spawn_worker(
    ctx: eframe::egui::Context,
    client: ContentClient,
) -> (UnboundedSender<IoCommand>, Receiver<IoResult>) {
    let (cmd_tx, mut cmd_rx) = unbounded_channel();
    let (res_tx, res_rx) = channel();

    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(e) => {
                log::error!("Failed to start content runtime: {}", e);
                let _ = res_tx.send(IoResult::Error(format!("Content loader unavailable: {}", e)));
                ctx.request_repaint();
                return;
            }
        };

        runtime.block_on(async move {
            while let Some(cmd) = cmd_rx.recv().await {
                match cmd {
                    IoCommand::LoadPage { route, request } => {
                        let client = client.clone();
                        let res_tx = res_tx.clone();
                        let ctx = ctx.clone();
                        tokio::spawn(async move {
                            log::debug!("Loading {} ({:?})", route, request);
                            let result = load_content(&client, &request)
                                .await
                                .map_err(|e| e.to_string());
                            if let Err(e) = &result {
                                log::warn!("Loading {} failed: {}", route, e);
                            }
                            let _ = res_tx.send(IoResult::PageLoaded { route, result });
                            ctx.request_repaint();
                        });
                    }
                }
            }
        });
        log::debug!("Content worker stopped");
    });

    (cmd_tx, res_rx)
}
