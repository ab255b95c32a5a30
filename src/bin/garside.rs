//! Thin CLI entry point (§6.4): parses the factor kind and its parameter,
//! then hands off to the generic shell driver instantiated against the
//! chosen concrete `FactorKind`.

use clap::Parser;
use garside::kinds::band::Band;
use garside::kinds::classical::Classical;
use garside::kinds::lattice_zn::LatticeZn;
use garside::kinds::FactorKindId;
use garside::factor::FactorKind;
use garside::repl;

#[derive(Parser)]
#[command(name = "garside")]
#[command(about = "A computational shell for Garside groups", long_about = None)]
#[command(version)]
struct Cli {
    /// Which family of Garside group to work in: classical, band, or lattice-zn
    #[arg(value_name = "KIND")]
    kind: FactorKindId,

    /// The group's defining parameter (strand count for classical/band,
    /// dimension for lattice-zn)
    #[arg(value_name = "PARAMETER")]
    parameter: String,
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.kind {
        FactorKindId::Classical => Classical::parameter_of_string(&cli.parameter)
            .map_err(|e| e.to_string())
            .and_then(|p| repl::run::<Classical>(p, Some(|e| format!("{:?}", garside::thurston::classify(e)))).map_err(|e| e.to_string())),
        FactorKindId::Band => Band::parameter_of_string(&cli.parameter)
            .map_err(|e| e.to_string())
            .and_then(|p| repl::run::<Band>(p, None).map_err(|e| e.to_string())),
        FactorKindId::LatticeZn => LatticeZn::parameter_of_string(&cli.parameter)
            .map_err(|e| e.to_string())
            .and_then(|p| repl::run::<LatticeZn>(p, None).map_err(|e| e.to_string())),
    };
    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
