//! Sortie Engine - command-line runner
//!
//! Builds a small demo squadron, flies one sortie through the resolution
//! engine and prints the report as JSON or as the mission log.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::sync::Arc;

use sortie_engine::aircraft::{AircraftType, AircraftUnit, Hangar};
use sortie_engine::base::{BaseResourcePool, FacilityRatings};
use sortie_engine::campaign::{CampaignMap, Captain, DailyDirective, MapLocation};
use sortie_engine::core::error::Result;
use sortie_engine::core::types::{LocationId, Vec2};
use sortie_engine::core::{load_config, Calendar, CampaignDate, EngineConfig};
use sortie_engine::crew::{CrewMember, CrewStats, Rank, Roster, Stat};
use sortie_engine::mission::{MissionEngine, RngDice, SortieContext, SortieReport};
use sortie_engine::sortie::{FlightAssignment, MissionType, RiskPosture, Sortie};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Risk {
    Conservative,
    Standard,
    Aggressive,
}

impl From<Risk> for RiskPosture {
    fn from(risk: Risk) -> Self {
        match risk {
            Risk::Conservative => RiskPosture::Conservative,
            Risk::Standard => RiskPosture::Standard,
            Risk::Aggressive => RiskPosture::Aggressive,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Text,
}

/// Fly one sortie with a demo squadron
#[derive(Parser, Debug)]
#[command(name = "sortie-engine")]
#[command(about = "Resolve a single squadron sortie and print the outcome")]
struct Args {
    /// Mission type (patrol, interception, escort, reconnaissance, bombing, strafing, artillery-spotting)
    #[arg(long, default_value = "patrol")]
    mission: String,

    /// Target distance, 1-150
    #[arg(long, default_value_t = 30.0)]
    distance: f32,

    /// Risk posture
    #[arg(long, value_enum, default_value_t = Risk::Standard)]
    risk: Risk,

    /// Random seed for deterministic runs
    #[arg(long)]
    seed: Option<u64>,

    /// Engine config TOML (defaults built in)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// HQ orders resources conserved today
    #[arg(long)]
    conserve: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sortie_engine=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let Some(mission_type) = MissionType::from_name(&args.mission) else {
        eprintln!("Unknown mission type '{}'", args.mission);
        std::process::exit(2);
    };

    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => EngineConfig::default(),
    };
    let engine = MissionEngine::with_config(config)?;

    let seed = args.seed.unwrap_or_else(rand::random);
    let mut dice = RngDice::seeded(seed);
    tracing::info!("Flying {} with seed {}", mission_type, seed);

    let mut squadron = DemoSquadron::build();
    let mut sortie = squadron.plan(mission_type, args.distance, args.risk.into());

    let directive = if args.conserve {
        DailyDirective::conserve()
    } else {
        DailyDirective::priority(
            "Hold the sky over the line",
            vec![MissionType::Patrol, MissionType::Interception, MissionType::Escort],
        )
    };

    let calendar = Calendar::new(CampaignDate(1));
    let mut ctx = SortieContext::new(
        &mut squadron.base,
        &mut squadron.hangar,
        &mut squadron.roster,
        &mut squadron.map,
        calendar.today(),
    )
    .with_command(&mut squadron.captain)
    .with_directive(&directive);

    let report = engine.resolve(&mut sortie, &mut ctx, &mut dice)?;

    match args.format {
        Format::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        Format::Text => print_text(&report, seed),
    }

    Ok(())
}

fn print_text(report: &SortieReport, seed: u64) {
    println!("Sortie Report");
    println!("=============");
    for entry in report.log.entries() {
        println!("  {:<13} {}", format!("[{}]", entry.phase), entry.text);
    }
    println!();
    println!("Fuel used: {}  Ammo used: {}", report.consumed.fuel, report.consumed.ammo);
    println!(
        "Enemy kills: {}  Aircraft lost: {}  Wounded: {}  Killed: {}",
        report.casualties.enemy_kills,
        report.casualties.aircraft_lost,
        report.casualties.crew_wounded,
        report.casualties.crew_killed
    );
    if let Some(found) = &report.discovery {
        println!("Discovered: {}", found.name);
    }
    println!("Seed: {}", seed);
}

/// Everything the runner needs for one sortie
struct DemoSquadron {
    base: BaseResourcePool,
    hangar: Hangar,
    roster: Roster,
    captain: Captain,
    map: CampaignMap,
    flights: Vec<FlightAssignment>,
    observer_flight: FlightAssignment,
    bomber_flight: FlightAssignment,
}

impl DemoSquadron {
    fn build() -> Self {
        let base = BaseResourcePool::new(400, 300, FacilityRatings::new(2, 2, 3, 2)).with_efficiency(0.1);

        let scout = Arc::new(AircraftType::scout());
        let two_seater = Arc::new(AircraftType::two_seater());
        let bomber = Arc::new(AircraftType::day_bomber());

        let mut hangar = Hangar::new();
        let scout_a = hangar.add(AircraftUnit::new(Arc::clone(&scout)));
        let scout_b = hangar.add(AircraftUnit::new(scout).with_condition(85.0));
        let recon = hangar.add(AircraftUnit::new(two_seater));
        let heavy = hangar.add(AircraftUnit::new(bomber));

        let mut roster = Roster::new();
        let hale = roster.enlist(
            CrewMember::new(
                "Hale",
                CrewStats::uniform(62).with(Stat::Fly, 78).with(Stat::Gun, 72).with(Stat::Rfx, 71),
            )
            .with_rank(Rank::Captain),
        );
        let marsh = roster.enlist(CrewMember::new("Marsh", CrewStats::uniform(48)));
        let osei = roster.enlist(
            CrewMember::new("Osei", CrewStats::uniform(55).with(Stat::Nav, 70))
                .with_rank(Rank::Lieutenant),
        );
        let bryce = roster.enlist(CrewMember::new("Bryce", CrewStats::uniform(50).with(Stat::Oa, 68)));
        let dunn = roster.enlist(CrewMember::new("Dunn", CrewStats::uniform(52).with(Stat::Gun, 66)));
        let kell = roster.enlist(CrewMember::new("Kell", CrewStats::uniform(51)));

        let map = CampaignMap::new(vec![
            MapLocation::hidden(LocationId(1), "Forward supply dump", Vec2::new(22.0, 6.0)),
            MapLocation::hidden(LocationId(2), "Enemy aerodrome", Vec2::new(48.0, -11.0)),
            MapLocation::hidden(LocationId(3), "Rail junction", Vec2::new(75.0, 30.0)),
            MapLocation::hidden(LocationId(4), "Artillery park", Vec2::new(110.0, 4.0)),
        ]);

        Self {
            base,
            hangar,
            roster,
            captain: Captain::new("Maj. Whitcombe"),
            map,
            flights: vec![FlightAssignment::new(scout_a, hale), FlightAssignment::new(scout_b, marsh)],
            observer_flight: FlightAssignment::new(recon, osei).with_observer(bryce),
            bomber_flight: FlightAssignment::new(heavy, kell).with_gunner(dunn),
        }
    }

    /// Pick flights suited to the mission and lay a straight course to the target
    fn plan(&self, mission_type: MissionType, distance: f32, risk: RiskPosture) -> Sortie {
        let assignments = match mission_type {
            MissionType::Reconnaissance | MissionType::ArtillerySpotting => {
                vec![self.observer_flight.clone(), self.flights[0].clone()]
            }
            MissionType::Bombing | MissionType::Strafing => {
                vec![self.bomber_flight.clone(), self.flights[0].clone(), self.flights[1].clone()]
            }
            _ => self.flights.clone(),
        };

        let mut sortie = Sortie::new(mission_type, distance, risk);
        let waypoints = vec![Vec2::new(0.0, 0.0), Vec2::new(sortie.target_distance, 0.0)];
        sortie = sortie.with_waypoints(waypoints);
        for assignment in assignments {
            sortie = sortie.with_assignment(assignment);
        }
        sortie
    }
}
