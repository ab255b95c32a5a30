//! The interactive command shell (§6.3): a single current element and an
//! optional second operand, driven by line commands read from stdin.
//!
//! Modeled on the teacher's `vsfinfo` CLI idiom — `colored` for status
//! text, plain `println!`/`eprintln!` reporting, no curses-style redraw.

use crate::centralizer::centralizer_generators;
use crate::conjugacy::are_conjugate;
use crate::element::Element;
use crate::error::{GarsideResult, ReplSignal};
use crate::factor::FactorKind;
use crate::summit::{scs::build_scs, sss::build_sss, uss::build_uss};
use crate::text::{parse_element, Printer};
use colored::*;
use std::fmt;
use std::io::{self, BufRead, Write};

fn render<F: FactorKind>(e: &Element<F>) -> String {
    struct Wrap<'a, F: FactorKind>(&'a Element<F>);
    impl<'a, F: FactorKind> fmt::Display for Wrap<'a, F> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            Printer::new().print_element(f, self.0)
        }
    }
    format!("{}", Wrap(e))
}

/// Distinguishes the two control-flow commands from ordinary ones: asking
/// for help or leaving the shell are expected parts of the interaction,
/// not commands with a result to print (§3.4).
fn classify_command(cmd: &str) -> Result<(), ReplSignal> {
    match cmd {
        "help" | "?" => Err(ReplSignal::HelpAskedFor),
        "quit" | "exit" => Err(ReplSignal::InterruptAskedFor),
        _ => Ok(()),
    }
}

fn print_help() {
    println!("{}", "commands:".cyan().bold());
    println!("  set <elt>        parse <elt> into the current element A");
    println!("  set2 <elt>       parse <elt> into the second operand B");
    println!("  show             print A");
    println!("  lcf / rcf        convert A into that canonical form");
    println!("  invert           replace A with its inverse");
    println!("  multiply <elt>   right-multiply A by <elt>");
    println!("  meet / join      replace A with A /\\ B or A \\/ B");
    println!("  cycle / decycle / slide");
    println!("  sss / uss / scs  print the size of A's summit set");
    println!("  conjugate        test whether A and B are conjugate");
    println!("  centralizer      print generators of A's centralizer");
    println!("  classify         Thurston-classify A (classical braids only)");
    println!("  random           replace A with a uniformly random factor");
    println!("  help             show this message");
    println!("  quit             leave the shell");
}

/// Runs the shell against factor kind `F` with parameter `parameter`.
/// `classify` is `Some` only when `F` supports Thurston classification
/// (classical braids); passing `None` makes the `classify` command report
/// it is unsupported.
pub fn run<F: FactorKind>(
    parameter: F::Parameter,
    classify: Option<fn(&Element<F>) -> String>,
) -> GarsideResult<()> {
    let stdin = io::stdin();
    let mut a = Element::<F>::identity(parameter.clone());
    let mut b = Element::<F>::identity(parameter.clone());

    println!("{}", "garside shell — type `help` for commands".green());
    loop {
        print!("> ");
        io::stdout().flush().ok();
        let mut line = String::new();
        if stdin.lock().read_line(&mut line).unwrap_or(0) == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let mut parts = line.splitn(2, char::is_whitespace);
        let cmd = parts.next().unwrap_or("");
        let rest = parts.next().unwrap_or("").trim();

        if let Err(signal) = classify_command(cmd) {
            match signal {
                ReplSignal::HelpAskedFor => {
                    print_help();
                    continue;
                }
                ReplSignal::InterruptAskedFor => break,
            }
        }

        match cmd {
            "set" => match parse_element::<F>(rest, &mut 0usize, &parameter) {
                Ok(e) => {
                    a = e;
                    println!("A = {}", render(&a));
                }
                Err(e) => eprintln!("{} {}", "error:".red(), e),
            },
            "set2" => match parse_element::<F>(rest, &mut 0usize, &parameter) {
                Ok(e) => {
                    b = e;
                    println!("B = {}", render(&b));
                }
                Err(e) => eprintln!("{} {}", "error:".red(), e),
            },
            "show" => println!("A = {}", render(&a)),
            "lcf" => {
                a = a.to_lcf();
                println!("A = {}", render(&a));
            }
            "rcf" => {
                a = a.to_rcf();
                println!("A = {}", render(&a));
            }
            "invert" => {
                a = a.invert();
                println!("A = {}", render(&a));
            }
            "multiply" => match parse_element::<F>(rest, &mut 0usize, &parameter) {
                Ok(e) => {
                    a.right_multiply(&e);
                    println!("A = {}", render(&a));
                }
                Err(e) => eprintln!("{} {}", "error:".red(), e),
            },
            "meet" => {
                a = a.left_meet(&b);
                println!("A = {}", render(&a));
            }
            "join" => {
                a = a.left_join(&b);
                println!("A = {}", render(&a));
            }
            "cycle" => {
                a = a.cycle();
                println!("A = {}", render(&a));
            }
            "decycle" => {
                a = a.decycle();
                println!("A = {}", render(&a));
            }
            "slide" => {
                a = a.cyclic_slide();
                println!("A = {}", render(&a));
            }
            "sss" => println!("|SSS(A)| = {}", build_sss(&a).len()),
            "uss" => {
                let orbits = build_uss(&a);
                let total: usize = orbits.iter().map(|o| o.len()).sum();
                println!("|USS(A)| = {} ({} orbits)", total, orbits.len());
            }
            "scs" => {
                let circuits = build_scs(&a);
                let total: usize = circuits.iter().map(|o| o.len()).sum();
                println!("|SCS(A)| = {} ({} circuits)", total, circuits.len());
            }
            "conjugate" => match are_conjugate(&a, &b) {
                Some(c) => println!("{} witness c = {}", "conjugate:".green(), render(&c)),
                None => println!("{}", "not conjugate".yellow()),
            },
            "centralizer" => {
                let gens = centralizer_generators(&a);
                println!("{} generators", gens.len());
                for g in &gens {
                    println!("  {}", render(g));
                }
            }
            "classify" => match classify {
                Some(f) => println!("{}", f(&a)),
                None => println!("{}", "classify is only implemented for classical braids".yellow()),
            },
            "random" => match F::randomize(&parameter, &mut rand::thread_rng()) {
                Ok(f) => {
                    a = Element::from_factor(f);
                    println!("A = {}", render(&a));
                }
                Err(e) => eprintln!("{} {}", "error:".red(), e),
            },
            other => eprintln!("{} unknown command `{}` (try `help`)", "error:".red(), other),
        }
    }
    Ok(())
}
