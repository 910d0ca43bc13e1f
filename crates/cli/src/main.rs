use anyhow::{Context, Result, anyhow};
use catalog::{Catalog, Course, CourseId, Teacher};
use clap::{Parser, Subcommand};
use colored::Colorize;
use listing::predicates::{
    course_predicates, teacher_predicates, FREE_ONLY, MIN_RATING, PRICE_RANGE,
};
use listing::{FilterEngine, FilterSession, FilterValue, ListingConfig, Paginator, Selection};
use media::{classify, embed_url, MediaReference, MediaSlot};
use std::path::PathBuf;
use std::time::Instant;

/// lms-browse - browse an LMS course catalog from the terminal
#[derive(Parser)]
#[command(name = "lms-browse")]
#[command(about = "Filter, page through and inspect an LMS course catalog", long_about = None)]
struct Cli {
    /// Directory containing courses.json and teachers.json
    #[arg(short, long, default_value = "data/catalog")]
    data_dir: PathBuf,

    /// Listing configuration (JSON: items_per_page, max_visible_pages, initial_page)
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List courses with filters and pagination
    Courses {
        /// Case-insensitive text search (title, description, instructor, tags)
        #[arg(long)]
        search: Option<String>,

        /// Category name, or "All Categories"
        #[arg(long)]
        category: Option<String>,

        /// Beginner, Intermediate, Advanced, or "All Levels"
        #[arg(long)]
        level: Option<String>,

        /// Keep courses with any of these tags (repeatable)
        #[arg(long = "tag")]
        tags: Vec<String>,

        #[arg(long)]
        min_rating: Option<f64>,

        #[arg(long)]
        max_price: Option<f64>,

        /// Only free courses
        #[arg(long)]
        free: bool,

        /// Page number, starting at 1 (defaults to the configured initial page)
        #[arg(long)]
        page: Option<usize>,

        /// Override items_per_page from the config
        #[arg(long)]
        per_page: Option<usize>,

        /// Print the page as JSON
        #[arg(long)]
        json: bool,
    },

    /// List teachers with filters and pagination
    Teachers {
        #[arg(long)]
        search: Option<String>,

        /// Subject taught
        #[arg(long)]
        subject: Option<String>,

        #[arg(long)]
        min_rating: Option<f64>,

        /// Page number, starting at 1 (defaults to the configured initial page)
        #[arg(long)]
        page: Option<usize>,
    },

    /// Classify a media URL (no catalog needed)
    Media {
        /// URL to classify; omit to classify an empty reference
        url: Option<String>,

        /// Treat the resolved media as having failed to load
        #[arg(long)]
        failed: bool,
    },

    /// Show a course's lessons and how their media resolves
    Lessons {
        course_id: CourseId,
    },

    /// Show categories with statistics
    Categories,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => ListingConfig::load(path)
            .with_context(|| format!("Failed to load listing config {}", path.display()))?,
        None => ListingConfig::default(),
    };

    // Media classification doesn't need the catalog
    if let Commands::Media { url, failed } = &cli.command {
        return handle_media(url.as_deref(), *failed);
    }

    let start = Instant::now();
    let catalog = Catalog::load_from_dir(&cli.data_dir)
        .with_context(|| format!("Failed to load catalog from {}", cli.data_dir.display()))?;
    tracing::debug!("Catalog loaded in {:?}", start.elapsed());

    match cli.command {
        Commands::Courses {
            search,
            category,
            level,
            tags,
            min_rating,
            max_price,
            free,
            page,
            per_page,
            json,
        } => {
            let mut session = FilterSession::new();
            if let Some(term) = search {
                session.set_search_term(term);
            }
            if let Some(category) = category {
                session.set_category(Selection::parse(&category));
            }
            if let Some(level) = level {
                session.set_level(Selection::parse(&level));
            }
            session.set_tags(tags);
            session.set_custom_filter(MIN_RATING, min_rating.map(FilterValue::Number));
            session.set_custom_filter(PRICE_RANGE, max_price.map(FilterValue::Number));
            session.set_custom_filter(FREE_ONLY, free.then_some(FilterValue::Flag(true)));

            let config = ListingConfig {
                items_per_page: per_page.unwrap_or(config.items_per_page),
                ..config
            };
            handle_courses(&catalog, &session, &config, page, json)?
        }
        Commands::Teachers {
            search,
            subject,
            min_rating,
            page,
        } => {
            let mut session = FilterSession::new();
            if let Some(term) = search {
                session.set_search_term(term);
            }
            if let Some(subject) = subject {
                session.set_category(Selection::parse(&subject));
            }
            session.set_custom_filter(MIN_RATING, min_rating.map(FilterValue::Number));
            handle_teachers(&catalog, &session, &config, page)?
        }
        Commands::Lessons { course_id } => handle_lessons(&catalog, course_id)?,
        Commands::Categories => handle_categories(&catalog),
        Commands::Media { .. } => unreachable!("handled before loading the catalog"),
    }

    Ok(())
}

/// Build a paginator for `total_items`, moving to the 1-based `page` if given
fn paginate(config: &ListingConfig, total_items: usize, page: Option<usize>) -> Result<Paginator> {
    config.validate()?;
    let mut pager = config.paginator(total_items)?;
    if let Some(page) = page {
        pager.go_to_page(page.saturating_sub(1));
    }
    Ok(pager)
}

/// Handle the 'courses' command
fn handle_courses(
    catalog: &Catalog,
    session: &FilterSession,
    config: &ListingConfig,
    page: Option<usize>,
    json: bool,
) -> Result<()> {
    let engine = FilterEngine::new(course_predicates());
    let view = engine.view(catalog.courses(), session.state());
    let pager = paginate(config, view.result_count(), page)?;
    let courses = pager.page_items(view.items());

    if json {
        let out = serde_json::json!({
            "courses": courses,
            "page": pager.page_info(),
            "result_count": view.result_count(),
            "total_count": view.total_count(),
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!(
        "{}",
        format!(
            "Courses: {} of {} match",
            view.result_count(),
            view.total_count()
        )
        .bold()
        .blue()
    );
    if session.has_active_filters() {
        println!("{}", "(filters active)".dimmed());
    }

    for course in courses {
        print_course(course);
    }
    print_pager(&pager, config.max_visible_pages);
    Ok(())
}

/// Handle the 'teachers' command
fn handle_teachers(
    catalog: &Catalog,
    session: &FilterSession,
    config: &ListingConfig,
    page: Option<usize>,
) -> Result<()> {
    let engine = FilterEngine::new(teacher_predicates());
    let view = engine.view(catalog.teachers(), session.state());
    let pager = paginate(config, view.result_count(), page)?;

    println!(
        "{}",
        format!(
            "Teachers: {} of {} match",
            view.result_count(),
            view.total_count()
        )
        .bold()
        .blue()
    );
    for teacher in pager.page_items(view.items()) {
        print_teacher(teacher);
    }
    print_pager(&pager, config.max_visible_pages);
    Ok(())
}

/// Handle the 'media' command
fn handle_media(url: Option<&str>, failed: bool) -> Result<()> {
    let mut slot = MediaSlot::new(url);
    let resolved = slot.reference().clone();
    if failed {
        slot.report_load_failure();
    }

    println!("{}", describe_media(slot.reference()));
    if let MediaReference::VideoThumbnail { video_id, .. } = &resolved {
        println!("  {} {}", "embed:".dimmed(), embed_url(video_id));
    }
    if failed && !resolved.is_placeholder() {
        println!("  {} {}", "was:".dimmed(), describe_media(&resolved));
    }
    Ok(())
}

/// Handle the 'lessons' command
fn handle_lessons(catalog: &Catalog, course_id: CourseId) -> Result<()> {
    let course = catalog
        .get_course(course_id)
        .ok_or_else(|| anyhow!("Course {} not found", course_id))?;

    println!("{}", course.title.bold().blue());
    if course.lessons.is_empty() {
        println!("  {}", "No lessons yet".dimmed());
        return Ok(());
    }
    for (i, lesson) in course.lessons.iter().enumerate() {
        println!(
            "{}. {} ({} min)",
            (i + 1).to_string().green(),
            lesson.title,
            lesson.duration_minutes
        );
        let reference = classify(lesson.video_url.as_deref());
        println!("   {}", describe_media(&reference));
        if let Some(id) = reference.video_id() {
            println!("   {} {}", "embed:".dimmed(), embed_url(id));
        }
    }
    println!(
        "{} {} min total",
        "•".cyan(),
        course.total_duration_minutes()
    );
    Ok(())
}

/// Handle the 'categories' command
fn handle_categories(catalog: &Catalog) {
    println!("{}", "Categories:".bold().blue());
    for (name, stats) in catalog.category_stats() {
        println!(
            "{} {}: {} courses, avg rating {:.2}, {} enrolled, {} free",
            "•".green(),
            name,
            stats.course_count,
            stats.avg_rating,
            stats.total_enrolled,
            stats.free_courses
        );
    }
}

fn describe_media(reference: &MediaReference) -> String {
    match reference {
        MediaReference::Image { url } => format!("{} {}", "image".green(), url),
        MediaReference::VideoThumbnail { url, video_id } => {
            format!("{} {} ({})", "video".yellow(), url, video_id)
        }
        MediaReference::Placeholder => "placeholder".dimmed().to_string(),
    }
}

fn print_course(course: &Course) {
    let price = if course.is_free() {
        "free".green().to_string()
    } else {
        format!("${:.2}", course.price)
    };
    println!(
        "{} {} [{} / {}] {} - rating {:.1}, {} students",
        format!("#{}", course.id).cyan(),
        course.title.bold(),
        course.category,
        course.level,
        price,
        course.rating,
        course.enrolled_students
    );
    println!("   by {}", course.instructor);
    if !course.tags.is_empty() {
        println!("   tags: {}", course.tags.join(", "));
    }
    let thumbnail = classify(course.thumbnail.as_deref());
    println!("   thumbnail: {}", describe_media(&thumbnail));
}

fn print_teacher(teacher: &Teacher) {
    println!(
        "{} {} - {} - rating {:.1}, {} courses",
        format!("#{}", teacher.id).cyan(),
        teacher.name.bold(),
        teacher.subjects.join(", "),
        teacher.rating,
        teacher.course_count
    );
    if !teacher.bio.is_empty() {
        println!("   {}", teacher.bio);
    }
}

fn print_pager(pager: &Paginator, max_visible: usize) {
    if pager.total_pages() == 0 {
        println!("{}", "No results".dimmed());
        return;
    }

    let pages: Vec<String> = pager
        .visible_page_numbers(max_visible)
        .into_iter()
        .map(|p| {
            if p == pager.current_page() {
                format!("[{}]", p + 1).bold().to_string()
            } else {
                (p + 1).to_string()
            }
        })
        .collect();

    let prev = if pager.can_go_previous() { "«" } else { " " };
    let next = if pager.can_go_next() { "»" } else { " " };
    println!(
        "{} {} {}   page {} of {} (items {}-{})",
        prev,
        pages.join(" "),
        next,
        pager.current_page() + 1,
        pager.total_pages(),
        pager.start_index() + 1,
        pager.end_index()
    );
}
