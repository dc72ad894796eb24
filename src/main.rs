use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use quillcast::blog::{self, BlogReader};
use quillcast::health::StatusView;
use quillcast::{
    Availability, Backend, Config, Draft, GenerationRequest, HealthMonitor, HttpBackend,
    ImageArtifact, Orchestrator, Platform, PublishOptions, Publisher, Session, Tone,
};
use std::sync::Arc;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(
    name = "quillcast",
    version,
    about = "Draft, illustrate, and publish platform content from one topic"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate drafts (and an image) for a topic
    Generate(GenerateArgs),
    /// Publish a finalized draft to one platform
    Publish(PublishArgs),
    /// Show backend health and per-platform readiness
    Status(StatusArgs),
    /// Load or unload the generation model
    Model(ModelArgs),
    /// List, show, or delete published blog posts
    Blog(BlogArgs),
}

#[derive(Parser, Debug)]
struct GenerateArgs {
    /// What to write about
    topic: String,

    /// Comma-separated subset of microblog,caption,blog — or "all"
    #[arg(short, long, default_value = "all", value_name = "LIST")]
    platforms: String,

    /// casual, reflective, technical, or humorous
    #[arg(long, default_value = "casual")]
    tone: String,

    /// Target word count for long-form content
    #[arg(long, default_value_t = 500, value_name = "N")]
    word_count: u32,
}

#[derive(Parser, Debug)]
struct PublishArgs {
    /// Destination platform
    platform: String,

    /// Finalized (possibly edited) draft text
    #[arg(long)]
    content: String,

    /// Title override (blog only)
    #[arg(long)]
    title: Option<String>,

    /// Comma-separated tags (blog only)
    #[arg(long, value_name = "LIST")]
    tags: Option<String>,

    /// Local image path to attach where the platform expects one
    #[arg(long, value_name = "PATH")]
    image_path: Option<String>,

    /// Image url to embed where the platform expects one
    #[arg(long, value_name = "URL")]
    image_url: Option<String>,
}

#[derive(Parser, Debug)]
struct StatusArgs {
    /// Keep polling on the fixed interval instead of probing once
    #[arg(long)]
    watch: bool,
}

#[derive(Parser, Debug)]
struct ModelArgs {
    /// start | stop
    action: String,
}

#[derive(Parser, Debug)]
struct BlogArgs {
    #[command(subcommand)]
    command: BlogCommand,
}

#[derive(Subcommand, Debug)]
enum BlogCommand {
    /// List published posts
    List,
    /// Print one post by slug
    Show { slug: String },
    /// Delete a post by id
    Delete { id: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let config = Config::from_env()?;
    let backend: Arc<dyn Backend> = Arc::new(HttpBackend::new(&config)?);

    match cli.command {
        Command::Generate(args) => cmd_generate(backend, args).await,
        Command::Publish(args) => cmd_publish(backend, args).await,
        Command::Status(args) => cmd_status(backend, &config, args).await,
        Command::Model(args) => cmd_model(backend, &config, args).await,
        Command::Blog(args) => cmd_blog(backend, args).await,
    }
}

fn parse_platforms(list: &str) -> Result<Vec<Platform>> {
    if list.trim().eq_ignore_ascii_case("all") {
        return Ok(Platform::ALL.to_vec());
    }
    list.split(',')
        .filter(|name| !name.trim().is_empty())
        .map(|name| name.parse::<Platform>().map_err(|err| anyhow!(err)))
        .collect()
}

async fn cmd_generate(backend: Arc<dyn Backend>, args: GenerateArgs) -> Result<()> {
    let platforms = parse_platforms(&args.platforms)?;
    let tone: Tone = args.tone.parse().map_err(|err: String| anyhow!(err))?;
    let request = GenerationRequest::new(args.topic, &platforms, tone, args.word_count)?;

    let session = Session::new();
    let orchestrator = Orchestrator::new(Arc::clone(&backend), session.clone());
    let drafts = orchestrator.generate(&request).await;

    for (platform, draft) in &drafts {
        println!("── {} ──", platform.label());
        match draft {
            Draft::Ready(text) => {
                println!("{text}");
                if let Some(limit) = platform.char_limit() {
                    let length = text.chars().count();
                    if length > limit {
                        println!("(note: {length} chars, destination limit is {limit})");
                    }
                }
            }
            Draft::Failed(message) => println!("(failed: {message})"),
        }
        println!();
    }

    if let Some(artifact) = session.artifact() {
        println!("image: {}", backend.resolve_url(&artifact.url));
        println!("image prompt: {}", artifact.prompt);
    }
    Ok(())
}

async fn cmd_publish(backend: Arc<dyn Backend>, args: PublishArgs) -> Result<()> {
    let platform: Platform = args.platform.parse().map_err(|err: String| anyhow!(err))?;

    let session = Session::new();
    if args.image_path.is_some() || args.image_url.is_some() {
        let artifact = ImageArtifact {
            prompt: String::new(),
            path: args.image_path.unwrap_or_default(),
            url: args.image_url.unwrap_or_default(),
        };
        session.set_artifact(session.token(), artifact);
    }

    let options = PublishOptions {
        title: args.title,
        tags: args.tags.map(|list| {
            list.split(',')
                .map(|tag| tag.trim().to_string())
                .filter(|tag| !tag.is_empty())
                .collect()
        }),
    };

    let publisher = Publisher::new(Arc::clone(&backend), session);
    let result = publisher.publish(platform, &args.content, options).await?;

    println!("published to {platform}");
    if let Some(id) = result.post_id {
        println!("  id:  {id}");
    }
    if let Some(url) = result.url {
        println!("  url: {url}");
    }
    Ok(())
}

async fn cmd_status(backend: Arc<dyn Backend>, config: &Config, args: StatusArgs) -> Result<()> {
    let monitor = Arc::new(HealthMonitor::with_timing(
        Arc::clone(&backend),
        config.poll_interval,
        config.reconcile_delay,
    ));

    if args.watch {
        let poller = Arc::clone(&monitor);
        tokio::spawn(poller.run());
        let mut last: Option<StatusView> = None;
        loop {
            tokio::time::sleep(Duration::from_secs(1)).await;
            let view = monitor.status().await;
            if last.as_ref() != Some(&view) {
                print_status(&view);
                last = Some(view);
            }
        }
    }

    monitor.probe().await;
    let view = monitor.status().await;
    print_status(&view);

    if view.availability == Availability::Online {
        let readiness = backend.platforms().await?;
        println!("platform credentials:");
        for (name, state) in &readiness {
            let verdict = match (state.configured, state.valid) {
                (true, true) => "ok".to_string(),
                (true, false) => state
                    .error
                    .clone()
                    .map(|err| format!("invalid ({err})"))
                    .unwrap_or_else(|| "invalid".to_string()),
                _ => "not configured".to_string(),
            };
            println!("  {name:<10} {verdict}");
        }
    }
    Ok(())
}

async fn cmd_model(backend: Arc<dyn Backend>, config: &Config, args: ModelArgs) -> Result<()> {
    let loaded = match args.action.as_str() {
        "start" => true,
        "stop" => false,
        other => return Err(anyhow!("unknown model action: {other} (use start|stop)")),
    };

    let monitor = HealthMonitor::with_timing(
        Arc::clone(&backend),
        config.poll_interval,
        config.reconcile_delay,
    );
    // Seed the snapshot so the optimistic flip has something to show.
    monitor.probe().await;
    monitor.set_model_loaded(loaded).await;
    print_status(&monitor.status().await);
    Ok(())
}

async fn cmd_blog(backend: Arc<dyn Backend>, args: BlogArgs) -> Result<()> {
    let reader = BlogReader::new(Arc::clone(&backend));
    match args.command {
        BlogCommand::List => {
            let posts = reader.posts().await?;
            if posts.is_empty() {
                println!("no posts");
            }
            for post in &posts {
                println!("{}", blog::summary_line(post));
            }
        }
        BlogCommand::Show { slug } => {
            let post = reader.post_by_slug(&slug).await?;
            println!("# {}\n", post.title);
            println!("{}", post.content);
            if let Some(url) = &post.image_url {
                println!("\nimage: {}", backend.resolve_url(url));
            }
        }
        BlogCommand::Delete { id } => {
            let ack = reader.delete(&id).await?;
            println!("{}", if ack.success { "deleted" } else { "delete failed" });
        }
    }
    Ok(())
}

fn print_status(view: &StatusView) {
    match view.availability {
        Availability::Offline => println!("backend: offline"),
        Availability::Online => {
            println!("backend: online");
            if let Some(snapshot) = &view.snapshot {
                println!(
                    "  model:  {}",
                    if snapshot.model_loaded { "loaded" } else { "not loaded" }
                );
                let ready: Vec<&str> = snapshot
                    .platforms_ready
                    .iter()
                    .map(|platform| platform.wire_id())
                    .collect();
                println!(
                    "  ready:  {}",
                    if ready.is_empty() { "none".to_string() } else { ready.join(", ") }
                );
                println!(
                    "  images: {}",
                    if snapshot.image_generation { "available" } else { "unavailable" }
                );
            }
        }
    }
}
