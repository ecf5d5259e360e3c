use std::io::{self, Write};

use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveTime};
use log::info;

use proprep::{
    build_feedback_prompt, build_question_prompt, AppConfig, Difficulty, FeedbackRequest,
    GenerationRequest, ProgressTracker, ProviderAdapter, ProviderChoice, QuestionCategory,
};

const ROLES: &[&str] = &[
    "Software Engineer",
    "Data Scientist",
    "Product Manager",
    "Designer",
    "Business Analyst",
];

const RESOURCES: &[(&str, &str)] = &[
    (
        "Interview Preparation Guide",
        "https://in.indeed.com/career-advice/interviewing/interview-preparation",
    ),
    (
        "Technical Interview Questions",
        "https://www.techinterviewhandbook.org/coding-interview-prep",
    ),
    (
        "Behavioral Interview Tips",
        "https://www.themuse.com/advice/behavioral-interview-questions-answers-examples",
    ),
    ("Mock Interview Platforms", "https://www.preplaced.in/"),
    (
        "Online Courses",
        "https://www.coursera.org/browse/information-technology",
    ),
];

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    // Both credentials must be present before any provider call is made.
    let config = AppConfig::from_env()
        .context("ProPrep cannot start without provider credentials (see .env.example)")?;
    let adapter = ProviderAdapter::new(&config);
    let mut tracker = ProgressTracker::new();

    info!("ProPrep starting");
    println!("Welcome to ProPrep - Your Ultimate Interview Preparation Platform!");

    loop {
        println!();
        println!("1) Generate interview questions");
        println!("2) Practice a question");
        println!("3) Track progress");
        println!("4) Schedule a mock interview");
        println!("5) Connect with resources");
        println!("6) Generate questions from a job description");
        println!("q) Quit");

        let choice = read_line("Select an option: ")?;
        let outcome = match choice.as_str() {
            "1" => generate_questions_flow(&adapter, &mut tracker).await,
            "2" => practice_flow(&adapter, &mut tracker).await,
            "3" => {
                show_progress(&tracker);
                Ok(())
            }
            "4" => schedule_mock_interview(&mut tracker),
            "5" => {
                show_resources(&mut tracker);
                Ok(())
            }
            "6" => job_description_flow(&adapter, &mut tracker).await,
            "q" | "Q" => break,
            _ => {
                println!("Unknown option.");
                Ok(())
            }
        };

        // A failed provider call is surfaced and the request abandoned; the
        // menu comes back up so the user can re-submit.
        if let Err(e) = outcome {
            eprintln!("Error: {e:#}");
        }
    }

    Ok(())
}

async fn generate_questions_flow(
    adapter: &ProviderAdapter,
    tracker: &mut ProgressTracker,
) -> Result<()> {
    let role = select("Select role", ROLES)?;
    let category = select_category()?;
    let difficulty = select_difficulty()?;
    let count = read_count("Number of questions (1-10): ", 10)?;
    let provider = select_provider()?;

    let request = GenerationRequest {
        role: role.to_string(),
        category,
        difficulty,
        count,
    };
    let prompt = build_question_prompt(&request);
    let questions = adapter.generate_questions(provider.as_str(), &prompt).await?;

    println!("\nGenerated questions:");
    for (idx, question) in questions.iter().enumerate() {
        println!("{}. {}", idx + 1, question);
    }

    tracker.record_questions(category, count);
    Ok(())
}

async fn practice_flow(adapter: &ProviderAdapter, tracker: &mut ProgressTracker) -> Result<()> {
    let role = select("Select role", ROLES)?;
    let category = select_category()?;
    let provider = select_provider()?;

    let request = GenerationRequest {
        role: role.to_string(),
        category,
        difficulty: Difficulty::Medium,
        count: 1,
    };
    let prompt = build_question_prompt(&request);
    let questions = adapter.generate_questions(provider.as_str(), &prompt).await?;
    let question = questions.into_iter().next().unwrap_or_default();

    println!("\nQuestion: {question}");

    let answer = read_line("Your answer: ")?;
    if answer.is_empty() {
        // Rejected here; an empty answer never reaches the prompt builder.
        println!("Please enter an answer to receive feedback.");
        return Ok(());
    }

    let feedback_request = FeedbackRequest { question, answer };
    let feedback_prompt = build_feedback_prompt(&feedback_request);
    let feedback = adapter
        .generate_feedback(provider.as_str(), &feedback_prompt)
        .await?;

    println!("\nFeedback and suggestions:\n{feedback}");
    tracker.record_feedback();
    Ok(())
}

fn show_progress(tracker: &ProgressTracker) {
    println!("\nYour progress so far:");
    for category in QuestionCategory::ALL_CATEGORIES {
        println!(
            "  {} questions solved: {}",
            category.as_str(),
            tracker.questions_solved(category)
        );
    }
    println!(
        "  Mock interviews taken: {}",
        tracker.mock_interviews_taken()
    );
    println!("  Feedback provided: {}", tracker.feedback_provided());
    println!("  Tips retrieved: {}", tracker.tips_retrieved());
}

fn schedule_mock_interview(tracker: &mut ProgressTracker) -> Result<()> {
    let date = loop {
        let line = read_line("Interview date (YYYY-MM-DD): ")?;
        match NaiveDate::parse_from_str(&line, "%Y-%m-%d") {
            Ok(date) => break date,
            Err(_) => println!("Please enter a date as YYYY-MM-DD."),
        }
    };
    let time = loop {
        let line = read_line("Interview time (HH:MM): ")?;
        match NaiveTime::parse_from_str(&line, "%H:%M") {
            Ok(time) => break time,
            Err(_) => println!("Please enter a time as HH:MM."),
        }
    };
    let email = read_line("Your email: ")?;
    if email.is_empty() {
        println!("Please enter your email address.");
        return Ok(());
    }

    // Placeholder confirmation; there is no email or calendar integration.
    println!(
        "Mock interview scheduled for {date} at {time}. An email confirmation will be sent to {email}."
    );
    tracker.record_mock_interview();
    Ok(())
}

fn show_resources(tracker: &mut ProgressTracker) {
    println!("\nUseful resources for your interview preparation:");
    for (name, link) in RESOURCES {
        println!("  - {name}: {link}");
    }
    tracker.record_tips();
}

async fn job_description_flow(
    adapter: &ProviderAdapter,
    tracker: &mut ProgressTracker,
) -> Result<()> {
    // The pasted description is collected but not yet fed into the prompt;
    // the generation runs with a placeholder role against the "All" bucket.
    let _job_description = read_line("Paste the job description: ")?;
    let provider = select_provider()?;

    let request = GenerationRequest {
        role: "Job Role".to_string(),
        category: QuestionCategory::All,
        difficulty: Difficulty::Medium,
        count: 5,
    };
    let prompt = build_question_prompt(&request);
    let questions = adapter.generate_questions(provider.as_str(), &prompt).await?;

    println!("\nGenerated questions:");
    for (idx, question) in questions.iter().enumerate() {
        println!("{}. {}", idx + 1, question);
    }

    // This flow bumps the "All" bucket once per run, not once per question.
    tracker.record_questions(QuestionCategory::All, 1);
    Ok(())
}

fn select_category() -> Result<QuestionCategory> {
    // "All" is reserved for the job-description flow.
    let categories = &QuestionCategory::ALL_CATEGORIES[..5];
    let labels: Vec<&str> = categories.iter().map(|c| c.as_str()).collect();
    let idx = select_index("Select question type", &labels)?;
    Ok(categories[idx])
}

fn select_difficulty() -> Result<Difficulty> {
    let labels: Vec<&str> = Difficulty::ALL_LEVELS.iter().map(|d| d.as_str()).collect();
    let idx = select_index("Select difficulty", &labels)?;
    Ok(Difficulty::ALL_LEVELS[idx])
}

fn select_provider() -> Result<ProviderChoice> {
    let labels: Vec<&str> = ProviderChoice::ALL_PROVIDERS
        .iter()
        .map(|p| p.as_str())
        .collect();
    let idx = select_index("Choose model", &labels)?;
    Ok(ProviderChoice::ALL_PROVIDERS[idx])
}

fn select<'a>(label: &str, options: &[&'a str]) -> Result<&'a str> {
    let idx = select_index(label, options)?;
    Ok(options[idx])
}

fn select_index(label: &str, options: &[&str]) -> Result<usize> {
    loop {
        println!("{label}:");
        for (idx, option) in options.iter().enumerate() {
            println!("  {}) {}", idx + 1, option);
        }
        let line = read_line("> ")?;
        if let Ok(n) = line.parse::<usize>() {
            if (1..=options.len()).contains(&n) {
                return Ok(n - 1);
            }
        }
        println!("Please enter a number between 1 and {}.", options.len());
    }
}

fn read_count(prompt: &str, max: u32) -> Result<u32> {
    loop {
        let line = read_line(prompt)?;
        if let Ok(n) = line.parse::<u32>() {
            if (1..=max).contains(&n) {
                return Ok(n);
            }
        }
        println!("Please enter a number between 1 and {max}.");
    }
}

fn read_line(prompt: &str) -> Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
