use anyhow::Result;
use clap::Parser;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use xiangqi_engine::agent::ai::{
    get_ai_params, AiParams, Difficulty, MatchContext, NegamaxEngine, TournamentFormat, ENGINE_COLOR,
};
use xiangqi_engine::game_repr::{Board, Color, GameOutcome, Move};

#[derive(Parser, Debug)]
#[command(name = "xiangqi", about = "Engine-vs-engine Xiangqi self-play from the opening position")]
struct Args {
    /// Tier for both sides: easy, medium or hard
    #[arg(long, default_value_t = Difficulty::Easy)]
    difficulty: Difficulty,

    /// Stop after this many plies
    #[arg(long, default_value_t = 40)]
    plies: usize,

    /// Seed for the engine's deliberate imprecision
    #[arg(long, default_value_t = 1u64)]
    seed: u64,

    /// Search root moves in parallel
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// BLACK plays a league game against an opponent of this strength (1-10)
    #[arg(long)]
    opponent_strength: Option<u8>,

    /// Print only the final position
    #[arg(long, default_value_t = false)]
    fen_only: bool,

    /// Print one JSON object per ply instead of text
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Serialize)]
struct PlyRecord<'a> {
    ply: usize,
    color: Color,
    #[serde(rename = "move")]
    mv: Move,
    notation: String,
    params: &'a AiParams,
    fen: String,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if let Some(strength) = args.opponent_strength {
        anyhow::ensure!((1..=10).contains(&strength), "opponent strength must be 1-10, got {}", strength);
    }
    let context = args.opponent_strength.map(|strength| MatchContext {
        opponent_strength: strength,
        format: TournamentFormat::RoundRobin,
    });

    let engine = NegamaxEngine::new(format!("AI ({})", args.difficulty)).with_parallel_root(args.parallel);
    let mut rng = StdRng::seed_from_u64(args.seed);
    let mut board = Board::initial();
    let mut color = Color::Red;

    info!("self-play: {} plies at {}, seed {}", args.plies, args.difficulty, args.seed);

    for ply in 1..=args.plies {
        let outcome = board.game_outcome(color);
        if outcome.is_over() {
            report_outcome(outcome, args.json)?;
            break;
        }

        let params = if color == ENGINE_COLOR {
            get_ai_params(&board, args.difficulty, context.as_ref())
        } else {
            AiParams::new(args.difficulty)
        };
        let Some(mv) = engine.choose_move(&board, color, &params, &mut rng) else {
            anyhow::bail!("engine returned no move for {:?} in an ongoing game", color);
        };
        board.make_move(mv);

        if args.json {
            let record = PlyRecord {
                ply,
                color,
                mv,
                notation: mv.to_string(),
                params: &params,
                fen: board.to_fen(color.opposite()),
            };
            println!("{}", serde_json::to_string(&record)?);
        } else if !args.fen_only {
            println!("{:>3}. {:?} {}", ply, color, mv);
            println!("     {}", board.to_fen(color.opposite()));
        }
        color = color.opposite();
    }

    if args.fen_only {
        println!("{}", board.to_fen(color));
    } else if !args.json {
        println!("{}", board);
    }
    Ok(())
}

fn report_outcome(outcome: GameOutcome, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(&outcome)?);
        return Ok(());
    }
    match outcome {
        GameOutcome::Mate { winner } => println!("Checkmate, {:?} wins", winner),
        GameOutcome::Stalemate => println!("Stalemate"),
        GameOutcome::Ongoing => {}
    }
    Ok(())
}
