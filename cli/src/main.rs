mod backend;
mod terminal;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use screening::backend::DEFAULT_BASE_URL;
use screening::{
    ApiConfig, ApiError, Backend, ChatController, ChatOutcome, ChatState, ExperienceLevel, LocalStore, ResumeFile,
    SearchController, SearchOutcome, SearchState, Store, UploadController, UploadOutcome,
};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::backend::ReqwestBackend;
use crate::terminal::{ProgressStore, TerminalNotifier, latest_replies, render_candidate, render_exchange};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("could not read {path}: {source}")]
    ReadFile { path: String, source: std::io::Error },
    #[error("unsupported file type: {0}")]
    Unsupported(String),
    #[error("upload rejected with HTTP {0}")]
    UploadRejected(u16),
    #[error("unknown experience code `{0}`; expected one of 0, 0.5, 1, 2, 3, 5")]
    UnknownExperience(String),
    #[error("{0}")]
    Input(&'static str),
    #[error("api request failed: {0}")]
    Api(#[from] ApiError),
    #[error("http client setup failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("terminal io failed: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Parser, Debug)]
#[command(name = "cv-cli", about = "Upload, search and question CVs from the terminal")]
struct Cli {
    #[arg(long, env = "CV_API_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Repeat for more log output on stderr.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List candidates known to the backend.
    Candidates,
    /// Upload a PDF, DOC or DOCX resume.
    Upload { path: PathBuf },
    /// Search candidates by filter.
    Search {
        #[arg(long = "skill")]
        skills: Vec<String>,

        #[arg(long, help = "Minimum experience code: 0, 0.5, 1, 2, 3 or 5")]
        experience: Option<String>,

        #[arg(long, default_value = "")]
        education: String,

        #[arg(long = "certification")]
        certifications: Vec<String>,
    },
    /// Ask one or more questions about a candidate in a single request.
    Ask {
        #[arg(long)]
        candidate: String,

        #[arg(required = true)]
        questions: Vec<String>,
    },
    /// Interactive chat about a candidate. `exit` or EOF ends it.
    Chat {
        #[arg(long)]
        candidate: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let backend = ReqwestBackend::new(ApiConfig::new(cli.base_url))?;
    tracing::debug!(base_url = %backend.config().base_url, "using backend");

    match cli.command {
        Command::Candidates => run_candidates(&backend).await,
        Command::Upload { path } => run_upload(backend, &path).await,
        Command::Search { skills, experience, education, certifications } => {
            run_search(backend, &skills, experience.as_deref(), education, &certifications).await
        }
        Command::Ask { candidate, questions } => run_ask(backend, &candidate, questions).await,
        Command::Chat { candidate } => run_chat(backend, &candidate).await,
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };
    tracing_subscriber::fmt().with_writer(std::io::stderr).with_max_level(level).init();
}

async fn run_candidates(backend: &ReqwestBackend) -> Result<(), CliError> {
    for candidate in backend.list_candidates().await? {
        println!("{}\t{}", candidate.id, candidate.name);
    }
    Ok(())
}

async fn run_upload(backend: ReqwestBackend, path: &Path) -> Result<(), CliError> {
    let bytes = tokio::fs::read(path).await.map_err(|source| CliError::ReadFile {
        path: path.display().to_string(),
        source,
    })?;
    let name = path.file_name().map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());

    let controller = UploadController::new(backend, TerminalNotifier, ProgressStore::default());
    if !controller.select_file(ResumeFile::new(name.clone(), bytes)) {
        return Err(CliError::Unsupported(name));
    }

    match controller.upload().await {
        UploadOutcome::Uploaded { status } => {
            tracing::info!(status, file = %name, "upload accepted");
            Ok(())
        }
        UploadOutcome::NoFileSelected => Err(CliError::Input("no file staged")),
        UploadOutcome::Rejected { status } => Err(CliError::UploadRejected(status)),
        UploadOutcome::Failed(error) => Err(error.into()),
    }
}

async fn run_search(
    backend: ReqwestBackend,
    skills: &[String],
    experience: Option<&str>,
    education: String,
    certifications: &[String],
) -> Result<(), CliError> {
    let controller = SearchController::new(backend, TerminalNotifier, LocalStore::new(SearchState::default()));

    for skill in skills {
        controller.set_custom_skill(skill.clone());
        if !controller.add_custom_skill() {
            controller.set_custom_skill(String::new());
        }
    }
    if let Some(code) = experience {
        let level = ExperienceLevel::from_code(code).ok_or_else(|| CliError::UnknownExperience(code.to_owned()))?;
        controller.set_min_experience(Some(level));
    }
    controller.set_education_level(education);
    for certification in certifications {
        controller.add_certification(certification);
    }

    match controller.search().await {
        SearchOutcome::Found(_) => {
            let results = controller.state().snapshot().results;
            let blocks: Vec<String> = results.iter().map(render_candidate).collect();
            println!("{}", blocks.join("\n\n"));
            Ok(())
        }
        SearchOutcome::Empty => Ok(()),
        SearchOutcome::Failed(error) => Err(error.into()),
    }
}

type TerminalChat = ChatController<ReqwestBackend, TerminalNotifier, LocalStore<ChatState>>;

async fn open_chat(backend: ReqwestBackend, candidate: &str) -> TerminalChat {
    let controller = ChatController::new(backend, TerminalNotifier, LocalStore::new(ChatState::default()));
    controller.activate().await;
    controller.select_candidate(candidate);
    match controller.state().with(|s| s.selected_name().map(str::to_owned)) {
        Some(name) => eprintln!("Chatting about {name}."),
        None => tracing::warn!(candidate, "candidate not in the backend's list"),
    }
    controller
}

fn check_outcome(outcome: ChatOutcome) -> Result<(), CliError> {
    match outcome {
        ChatOutcome::Answered => Ok(()),
        ChatOutcome::NoCandidate => Err(CliError::Input("no candidate selected")),
        ChatOutcome::EmptyQuery => Err(CliError::Input("question is empty")),
        ChatOutcome::Failed(error) => Err(error.into()),
    }
}

/// Send the staged query and print the reply.
async fn ask(controller: &TerminalChat, question: String) -> Result<(), CliError> {
    controller.set_query(question);
    check_outcome(controller.send().await)?;
    for reply in controller.state().with(|s| latest_replies(s, 1)) {
        println!("{reply}");
    }
    Ok(())
}

async fn run_ask(backend: ReqwestBackend, candidate: &str, questions: Vec<String>) -> Result<(), CliError> {
    let controller = open_chat(backend, candidate).await;
    if let [question] = questions.as_slice() {
        return ask(&controller, question.clone()).await;
    }

    check_outcome(controller.send_batch(&questions).await)?;
    let asked: Vec<&String> = questions.iter().filter(|q| !q.trim().is_empty()).collect();
    let replies = controller.state().with(|s| latest_replies(s, asked.len()));
    let blocks: Vec<String> = asked.iter().zip(&replies).map(|(q, a)| render_exchange(q, a)).collect();
    println!("{}", blocks.join("\n\n"));
    Ok(())
}

async fn run_chat(backend: ReqwestBackend, candidate: &str) -> Result<(), CliError> {
    let controller = open_chat(backend, candidate).await;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if matches!(line, "exit" | "quit") {
            break;
        }
        if line.is_empty() {
            continue;
        }
        // Failures were already shown as notices; keep the session open.
        if let Err(error) = ask(&controller, line.to_owned()).await {
            tracing::debug!(%error, "question failed");
        }
    }
    Ok(())
}
