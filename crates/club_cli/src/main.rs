//! Club CLI
//!
//! Inspect the formation catalog, print or edit a match lineup stored in a
//! JSON snapshot, and run the OCR stat extractor over text files.

mod pitch_view;

use anyhow::{anyhow, bail, Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::{Path, PathBuf};

use club_core::models::{MatchOutcome, Venue};
use club_core::{
    get_formation, ClubConfig, InMemoryStore, LineupService, LineupView, MatchRecord,
    StatExtractor, StatField, StatsService, FORMATION_CATALOG,
};

#[derive(Parser)]
#[command(name = "club")]
#[command(about = "Formations, lineups and OCR stat import for the club site", long_about = None)]
struct Cli {
    /// Config file (overrides CLUB_CONFIG_PATH)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Club data snapshot (overrides snapshot_path from the config)
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List formations, or show one in detail
    Formations {
        /// Formation id, e.g. "4-3-3"
        #[arg(long)]
        id: Option<String>,

        /// Print JSON instead of a table
        #[arg(long, default_value = "false")]
        json: bool,
    },

    /// Add a fixture (formation defaults to the configured one)
    NewMatch {
        #[arg(long)]
        id: String,

        #[arg(long)]
        opponent: String,

        /// RFC 3339 timestamp, e.g. 2026-10-24T15:00:00Z
        #[arg(long)]
        kickoff: String,

        #[arg(long, default_value = "false")]
        away: bool,

        #[arg(long)]
        formation: Option<String>,
    },

    /// Show the lineup of a match on a text pitch
    Lineup {
        /// Match id
        #[arg(long = "match")]
        match_id: String,
    },

    /// Put a player in a slot (omit --player to clear it)
    Assign {
        #[arg(long = "match")]
        match_id: String,

        /// Position id within the match formation, e.g. "LW"
        #[arg(long)]
        position: String,

        #[arg(long)]
        player: Option<String>,
    },

    /// Extract stats from OCR text ("-" reads stdin)
    Extract {
        #[arg(long)]
        input: PathBuf,

        /// Comma-separated stat keys to look for (overrides the config)
        #[arg(long, value_delimiter = ',')]
        fields: Vec<String>,

        /// Merge the detected stats into this player's record
        #[arg(long)]
        player: Option<String>,

        /// Required with --player: write the merge back to the snapshot
        #[arg(long, default_value = "false")]
        confirm: bool,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;
    log::debug!(
        "default formation {}, {} extractor field(s)",
        config.default_formation,
        config.extractor.fields.len()
    );

    match cli.command {
        Commands::Formations { id, json } => show_formations(id.as_deref(), json)?,

        Commands::NewMatch { id, opponent, kickoff, away, formation } => {
            let kickoff = DateTime::parse_from_rfc3339(&kickoff)
                .with_context(|| format!("Invalid kickoff time: {}", kickoff))?
                .with_timezone(&Utc);
            let venue = if away { Venue::Away } else { Venue::Home };
            let record =
                MatchRecord::new(id, opponent, kickoff, venue, formation.unwrap_or_default());

            let path = data_path(cli.data.as_deref(), &config)?;
            let store = open_store(&path)?;
            let service = LineupService::with_default_formation(&store, &config.default_formation);

            let record = service.create_match(record)?;
            store.save_to(&path)?;

            println!("✅ {} vs {} added ({})", record.id, record.opponent, record.formation);
        }

        Commands::Lineup { match_id } => {
            let path = data_path(cli.data.as_deref(), &config)?;
            let store = open_store(&path)?;
            show_lineup(&store, &config, &match_id)?;
        }

        Commands::Assign { match_id, position, player } => {
            let path = data_path(cli.data.as_deref(), &config)?;
            let store = open_store(&path)?;
            let service = LineupService::with_default_formation(&store, &config.default_formation);

            let lineup = service.assign(&match_id, &position, player.as_deref())?;
            store.save_to(&path)?;

            println!("✅ {} now has {} of 11 slots filled", match_id, lineup.len());
        }

        Commands::Extract { input, fields, player, confirm } => {
            let text = read_input(&input)?;
            let extractor = build_extractor(&fields, &config)?;

            let Some(player_id) = player else {
                let record = extractor.extract(&text);
                println!("{}", serde_json::to_string_pretty(&record)?);
                if record.is_empty() {
                    eprintln!("⚠️  No stats detected");
                }
                return Ok(());
            };

            let path = data_path(cli.data.as_deref(), &config)?;
            let store = open_store(&path)?;
            let service = StatsService::with_extractor(&store, extractor);

            let draft = service.extract(&text);
            println!("{}", serde_json::to_string_pretty(&draft)?);

            if draft.is_empty() {
                eprintln!("⚠️  No stats detected; nothing to merge");
            } else if !confirm {
                eprintln!("Review the values above and re-run with --confirm to save them");
            } else if let Some(stats) = service.apply_confirmed(&player_id, &draft)? {
                store.save_to(&path)?;
                println!(
                    "✅ Saved stats for {}: {} goals, {} assists",
                    player_id, stats.goals, stats.assists
                );
                if let Some(minutes) = stats.minutes_per_goal() {
                    println!("   {:.0} minutes per goal", minutes);
                }
            }
        }
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<ClubConfig> {
    let config = match path {
        Some(path) => ClubConfig::load(&path.to_string_lossy())?,
        None => ClubConfig::from_env()?,
    };
    Ok(config)
}

fn data_path(cli_path: Option<&Path>, config: &ClubConfig) -> Result<PathBuf> {
    match cli_path.map(Path::to_path_buf).or_else(|| config.snapshot_path.clone()) {
        Some(path) => Ok(path),
        None => bail!("No club data: pass --data or set snapshot_path in the config"),
    }
}

fn open_store(path: &Path) -> Result<InMemoryStore> {
    InMemoryStore::open(path)
        .with_context(|| format!("Failed to open club data: {}", path.display()))
}

/// `--fields` wins over the config; unknown keys are an error.
fn build_extractor(keys: &[String], config: &ClubConfig) -> Result<StatExtractor> {
    if keys.is_empty() {
        return Ok(config.extractor.build());
    }

    let fields = keys
        .iter()
        .map(|key| StatField::from_key(key).ok_or_else(|| anyhow!("Unknown stat field: {}", key)))
        .collect::<Result<Vec<_>>>()?;
    Ok(StatExtractor::new(&fields))
}

fn read_input(input: &Path) -> Result<String> {
    if input == Path::new("-") {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        return Ok(text);
    }
    std::fs::read_to_string(input)
        .with_context(|| format!("Failed to read OCR text: {}", input.display()))
}

fn show_formations(id: Option<&str>, json: bool) -> Result<()> {
    let Some(id) = id else {
        if json {
            println!("{}", club_core::list_formations_json().map_err(anyhow::Error::msg)?);
            return Ok(());
        }
        for formation in FORMATION_CATALOG.all() {
            let (d, m, f) = formation.shape();
            println!("{:<10} {}-{}-{}  {}", formation.id, d, m, f, formation.description);
        }
        return Ok(());
    };

    let Some(formation) = get_formation(id) else {
        println!("Formation {} is not available", id);
        return Ok(());
    };

    if json {
        println!("{}", serde_json::to_string_pretty(formation)?);
        return Ok(());
    }

    println!("{} - {}", formation.name, formation.description);
    for position in &formation.positions {
        let (left, top) = club_core::lineup::project_position(position).css_percent();
        println!(
            "  {:<4} {:<28} {:<4} left {:>5.1}%  top {:>5.1}%",
            position.id,
            position.label,
            position.role.short_name(),
            left,
            top
        );
    }
    Ok(())
}

fn show_lineup(store: &InMemoryStore, config: &ClubConfig, match_id: &str) -> Result<()> {
    let service = LineupService::with_default_formation(store, &config.default_formation);
    let lineup = match service.load(match_id)? {
        LineupView::Ready(lineup) => lineup,
        LineupView::FormationUnavailable { formation_id, .. } => {
            println!("Formation {} is not available for match {}", formation_id, match_id);
            return Ok(());
        }
    };

    let record = &lineup.record;
    println!(
        "{} vs {} ({}) - {}",
        record.id,
        record.opponent,
        record.kickoff.format("%Y-%m-%d %H:%M UTC"),
        lineup.formation.id
    );
    if let (Some(scoreline), Some(outcome)) =
        (record.scoreline(&store.club_name()?), record.outcome())
    {
        let result = match outcome {
            MatchOutcome::Win => "W",
            MatchOutcome::Draw => "D",
            MatchOutcome::Loss => "L",
        };
        println!("{}  [{}]", scoreline, result);
    }

    let placements = lineup.placements();
    println!("{}", pitch_view::render(&placements));

    for placement in &placements {
        match placement.member {
            Some(member) => println!("  {:<4} {}", placement.position.id, member.display_label()),
            None => println!("  {:<4} (empty)", placement.position.id),
        }
    }

    let unfilled = lineup.unfilled();
    if !unfilled.is_empty() {
        println!("{} slot(s) still open: {}", unfilled.len(), unfilled.join(", "));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_flag_overrides_config() {
        let config = ClubConfig::default();

        let all = build_extractor(&[], &config).unwrap();
        assert_eq!(all.fields().len(), StatField::all().len());

        let keys = vec!["goals".to_string(), "yellowCards".to_string()];
        let picked = build_extractor(&keys, &config).unwrap();
        assert_eq!(picked.fields(), &[StatField::Goals, StatField::YellowCards]);

        assert!(build_extractor(&["saves".to_string()], &config).is_err());
    }
}
