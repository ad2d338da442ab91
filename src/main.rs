use clap::{Parser, Subcommand};
use std::process::ExitCode;

use congruential::configs::{MINSTD_MODULUS, MINSTD_MULTIPLIER};
use congruential::{Generator, InvalidParameterError, Lcg, Lehmer, Randu};

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Number of values to print
    #[arg(short, long, default_value_t = 10, global = true)]
    count: usize,

    #[command(subcommand)]
    generator: GeneratorKind,
}

#[derive(Subcommand)]
enum GeneratorKind {
    /// Linear congruential generator, X' = (aX + c) mod m
    Lcg {
        #[arg(short = 'a', long)]
        multiplier: u64,
        #[arg(short, long)]
        seed: u64,
        #[arg(short = 'i', long)]
        increment: u64,
        #[arg(short, long)]
        modulus: u64,
    },

    /// RANDU, X' = 65539 X mod 2^31, printed as values in [0, 1)
    Randu {
        #[arg(short, long)]
        seed: u64,

        /// Also print (9 x0 - 6 x1 + x2) mod 2^31 for each consecutive triple
        #[arg(short, long, default_value_t = false)]
        planes: bool,
    },

    /// Lehmer / Park–Miller, X' = a X mod m with m prime
    Lehmer {
        #[arg(short, long)]
        seed: u64,
        #[arg(short = 'a', long, default_value_t = MINSTD_MULTIPLIER)]
        multiplier: u64,
        #[arg(short, long, default_value_t = MINSTD_MODULUS)]
        modulus: u64,

        /// Use the original 1988 multiplier 16807, ignoring --multiplier and --modulus
        #[arg(long, default_value_t = false)]
        rand0: bool,
    },
}

fn run(cli: Cli) -> Result<(), InvalidParameterError> {
    match cli.generator {
        GeneratorKind::Lcg {
            multiplier,
            seed,
            increment,
            modulus,
        } => {
            let mut lcg = Lcg::new(multiplier, seed, increment, modulus)?;
            log::info!("Full period (Hull–Dobell): {}", lcg.has_full_period());
            print_sequence(&mut lcg, cli.count);
        }
        GeneratorKind::Randu { seed, planes } => {
            let mut randu = Randu::new(seed)?;
            log::info!("Generator: {}", randu.name());
            let mut previous: Vec<u64> = Vec::with_capacity(3);
            for _ in 0..cli.count {
                let value = randu.next_randu();
                if planes {
                    previous.push(randu.current_state());
                    if previous.len() > 3 {
                        previous.remove(0);
                    }
                    if let [x0, x1, x2] = previous[..] {
                        println!("{} plane={}", value, Randu::plane_residue(x0, x1, x2));
                        continue;
                    }
                }
                println!("{}", value);
            }
        }
        GeneratorKind::Lehmer {
            seed,
            multiplier,
            modulus,
            rand0,
        } => {
            let mut lehmer = if rand0 {
                Lehmer::minstd_rand0(seed)?
            } else {
                Lehmer::with_params(multiplier, seed, modulus)?
            };
            print_sequence(&mut lehmer, cli.count);
        }
    }
    Ok(())
}

fn print_sequence<G: Generator>(generator: &mut G, count: usize) {
    log::info!(
        "Generator: {} (modulus {}, seed {})",
        generator.name(),
        generator.modulus(),
        generator.current_state()
    );
    for value in generator.sequence().take(count) {
        println!("{}", value);
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
