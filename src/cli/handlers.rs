use serde::Serialize;

use crate::catalog::Catalog;
use crate::config::SyazaiConfig;
use crate::entity::{ApologyVariant, Excuse, Method, Recipient, Situation};
use crate::error::{Result, SyazaiError};
use crate::render::{render_text, subject};
use crate::resolve::{available_excuses, resolve};
use crate::search::search_with;
use crate::warnings::{check_catalog, format_warning};

fn print_situation_line(s: &Situation) {
    println!("  {:<20} [{}] {}", s.slug, s.severity.label(), s.title);
}

pub fn handle_categories(config: &SyazaiConfig, json: bool) -> Result<()> {
    let catalog = config.open_catalog()?;

    if json {
        println!("{}", serde_json::to_string_pretty(catalog.categories())?);
        return Ok(());
    }

    if catalog.categories().is_empty() {
        println!("No categories found.");
        return Ok(());
    }

    for category in catalog.categories() {
        println!("{} ({}) - {}", category.name, category.id, category.description);
        let mut any = false;
        for situation in catalog.situations_in_category(&category.id) {
            print_situation_line(situation);
            any = true;
        }
        if !any {
            println!("  (no situations yet)");
        }
        println!();
    }

    Ok(())
}

pub fn handle_list(config: &SyazaiConfig, category: Option<String>, json: bool) -> Result<()> {
    let catalog = config.open_catalog()?;

    let situations: Vec<&Situation> = match category.as_deref() {
        Some(id) => {
            if catalog.category(id).is_none() {
                return Err(SyazaiError::CategoryNotFound(id.to_string()));
            }
            catalog.situations_in_category(id).collect()
        }
        None => catalog.situations().iter().collect(),
    };

    if json {
        #[derive(Serialize)]
        struct SituationSummary<'a> {
            slug: &'a str,
            title: &'a str,
            category: &'a str,
            severity: String,
            description: &'a str,
        }

        let summaries: Vec<SituationSummary> = situations
            .iter()
            .map(|s| SituationSummary {
                slug: &s.slug,
                title: &s.title,
                category: &s.category,
                severity: s.severity.to_string(),
                description: &s.description,
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&summaries)?);
    } else if situations.is_empty() {
        println!("No situations found.");
    } else {
        println!("Situations:\n");
        for s in situations {
            print_situation_line(s);
        }
    }

    Ok(())
}

fn find_situation<'a>(catalog: &'a Catalog, slug: &str) -> Result<&'a Situation> {
    catalog
        .find_by_slug(slug)
        .ok_or_else(|| SyazaiError::SituationNotFound(slug.to_string()))
}

pub fn handle_show(config: &SyazaiConfig, slug: String, json: bool) -> Result<()> {
    let catalog = config.open_catalog()?;
    let situation = find_situation(&catalog, &slug)?;

    if json {
        println!("{}", serde_json::to_string_pretty(situation)?);
        return Ok(());
    }

    println!("{} [{}]", situation.title, situation.severity.label());
    println!("{}", situation.description);

    if let Some(category) = catalog.category(&situation.category) {
        println!("Category: {} ({})", category.name, category.id);
    }

    println!("\nTemplates:");
    for (recipient, method) in situation.available_pairs() {
        let excuses = available_excuses(situation, recipient, method);
        if excuses.is_empty() {
            println!("  {}/{}", recipient, method);
        } else {
            let names: Vec<String> = excuses.iter().map(|e| e.to_string()).collect();
            println!("  {}/{} (excuses: {})", recipient, method, names.join(", "));
        }
    }

    if !situation.checklist.is_empty() {
        println!("\nChecklist:");
        for item in &situation.checklist {
            println!("  [ ] {}", item.text);
        }
    }

    if !situation.suggestions.is_empty() {
        println!("\nSuggestions:");
        for card in &situation.suggestions {
            println!("  - {}: {}", card.title, card.description);
            if let Some(link) = &card.link {
                println!("    {}", link);
            }
        }
    }

    Ok(())
}

pub fn handle_resolve(
    config: &SyazaiConfig,
    slug: String,
    recipient: Option<String>,
    method: Option<String>,
    excuse: String,
    subject_number: Option<usize>,
    json: bool,
) -> Result<()> {
    // Validate the selection before touching the catalog
    let recipient: Recipient = match recipient {
        Some(r) => r.parse()?,
        None => config.defaults.recipient,
    };
    let method: Method = match method {
        Some(m) => m.parse()?,
        None => config.defaults.method,
    };
    let excuse = Excuse::parse_choice(&excuse)?;

    let catalog = config.open_catalog()?;
    let situation = find_situation(&catalog, &slug)?;

    let variant = resolve(situation, recipient, method, excuse).ok_or_else(|| {
        SyazaiError::NoTemplate {
            slug: slug.clone(),
            recipient: recipient.to_string(),
            method: method.to_string(),
        }
    })?;

    let applied = excuse.filter(|e| variant.excuse_overrides.contains_key(e));
    if let (Some(requested), None) = (excuse, applied) {
        tracing::warn!(
            "excuse '{}' is not available for {}/{} of '{}', using the standard text",
            requested,
            recipient,
            method,
            slug
        );
    }

    if let Some(n) = subject_number {
        let line = subject(&variant, n).ok_or_else(|| SyazaiError::InvalidArgument {
            field: "subject".to_string(),
            value: n.to_string(),
            valid: (1..=variant.content.subjects.as_ref().map_or(0, Vec::len))
                .map(|i| i.to_string())
                .collect(),
        })?;
        println!("{}", line);
        return Ok(());
    }

    if json {
        #[derive(Serialize)]
        struct ResolvedJson<'a> {
            slug: &'a str,
            #[serde(skip_serializing_if = "Option::is_none")]
            excuse: Option<Excuse>,
            available_excuses: Vec<Excuse>,
            #[serde(flatten)]
            variant: &'a ApologyVariant,
        }

        let out = ResolvedJson {
            slug: &situation.slug,
            excuse: applied,
            available_excuses: available_excuses(situation, recipient, method),
            variant: &variant,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        print!("{}", render_text(&variant, method));
    }

    Ok(())
}

pub fn handle_search(config: &SyazaiConfig, query: String, json: bool) -> Result<()> {
    let catalog = config.open_catalog()?;
    let results = search_with(&catalog, &query, config.search.into());

    if json {
        #[derive(Serialize)]
        struct SearchResultJson<'a> {
            slug: &'a str,
            title: &'a str,
            description: &'a str,
        }

        let json_results: Vec<SearchResultJson> = results
            .iter()
            .map(|s| SearchResultJson {
                slug: &s.slug,
                title: &s.title,
                description: &s.description,
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&json_results)?);
    } else if query.trim().is_empty() {
        println!("Enter a search term.");
    } else if results.is_empty() {
        println!("No results found for '{}'.", query);
    } else {
        println!("Search results for '{}':\n", query);
        for s in results {
            print_situation_line(s);
            println!("      {}", s.description);
        }
    }

    Ok(())
}

pub fn handle_check(config: &SyazaiConfig, json: bool) -> Result<()> {
    let catalog = config.open_catalog()?;
    let warnings = check_catalog(&catalog);

    if json {
        println!("{}", serde_json::to_string_pretty(&warnings)?);
    } else if warnings.is_empty() {
        println!(
            "Catalog OK: {} situations, {} categories.",
            catalog.situations().len(),
            catalog.categories().len()
        );
    } else {
        for warning in &warnings {
            println!("{}", format_warning(warning));
        }
    }

    Ok(())
}
