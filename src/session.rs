// src/session.rs
//! The interactive command loop.
//!
//! Generic over its input and output streams so tests can script a whole
//! session through in-memory buffers. Bad user input never ends the loop;
//! only end-of-input does.

use std::collections::BTreeSet;
use std::io::{self, BufRead, Write};

use anyhow::Result;
use colored::Colorize;

use crate::universe::Universe;

/// Runs the game over `input` until it is exhausted.
///
/// # Errors
/// Returns an error only when reading `input` or writing `out` fails;
/// unknown commands and unknown actors just print a notice.
pub fn run(universe: &mut Universe, input: impl BufRead, out: &mut impl Write) -> Result<()> {
    let mut lines = input.lines();

    print_welcome(universe, out)?;

    loop {
        write!(out, "> ")?;
        out.flush()?;
        let Some(line) = lines.next() else {
            break;
        };

        match line?.trim() {
            "" => {}
            "f" => print_candidates(universe, out)?,
            "sd" => print_degrees(universe, out)?,
            "u" => print_unreachable(universe, out)?,
            "p" => print_path(universe, &mut lines, out)?,
            "cc" => change_center(universe, &mut lines, out)?,
            "as" => print_average(universe, out)?,
            other => {
                let notice =
                    format!("Unknown command {other:?}. Valid commands: f, sd, u, p, cc, as.");
                writeln!(out, "{}", notice.yellow())?;
            }
        }
    }

    Ok(())
}

fn print_welcome(universe: &Universe, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}", "Welcome to the Bacon game!".bold())?;
    writeln!(
        out,
        "The current center of the universe is {}.",
        universe.center().cyan()
    )?;
    writeln!(out)?;
    writeln!(out, "Commands:")?;
    writeln!(out, "  f   rank reachable actors as candidate centers, best first")?;
    writeln!(out, "  sd  list actors by degree within the current center's tree")?;
    writeln!(out, "  u   list actors unreachable from the current center")?;
    writeln!(out, "  p   show an actor's path to the current center")?;
    writeln!(out, "  cc  change the center of the universe")?;
    writeln!(out, "  as  show the average separation for the current center")?;
    Ok(())
}

fn print_candidates(universe: &Universe, out: &mut impl Write) -> Result<()> {
    writeln!(out, "Candidate centers, shortest average separation first:")?;
    for (actor, average) in universe.rank_centers() {
        writeln!(out, "  {actor} (average separation {average})")?;
    }
    Ok(())
}

fn print_degrees(universe: &Universe, out: &mut impl Write) -> Result<()> {
    writeln!(
        out,
        "Actors in {}'s tree by in-degree, least connected first:",
        universe.center()
    )?;
    for (actor, degree) in universe.tree_degrees_ascending() {
        writeln!(out, "  {actor} has {degree} in-degree{}.", plural(degree))?;
    }
    Ok(())
}

fn print_unreachable(universe: &Universe, out: &mut impl Write) -> Result<()> {
    let missing = universe.unreachable();
    if missing.is_empty() {
        writeln!(out, "Everyone is reachable from {}.", universe.center())?;
        return Ok(());
    }
    for actor in missing {
        writeln!(out, "{actor} is unreachable from {}.", universe.center())?;
    }
    Ok(())
}

fn print_path(
    universe: &Universe,
    lines: &mut impl Iterator<Item = io::Result<String>>,
    out: &mut impl Write,
) -> Result<()> {
    let Some(name) = prompt_name("Type the name of an actor:", lines, out)? else {
        return Ok(());
    };

    if !universe.contains(&name) {
        writeln!(out, "{}", format!("{name} is not in this universe.").yellow())?;
        return Ok(());
    }
    let Some(steps) = universe.path_steps(&name) else {
        let notice = format!("{name} is unreachable from {}.", universe.center());
        writeln!(out, "{}", notice.yellow())?;
        return Ok(());
    };

    writeln!(out, "{name}'s number is {}", steps.len())?;
    for step in steps {
        writeln!(
            out,
            "{} appeared in {} with {}",
            step.from,
            fmt_movies(&step.movies),
            step.to
        )?;
    }
    Ok(())
}

fn change_center(
    universe: &mut Universe,
    lines: &mut impl Iterator<Item = io::Result<String>>,
    out: &mut impl Write,
) -> Result<()> {
    let prompt = "Type the name of the actor to become the new center:";
    let Some(name) = prompt_name(prompt, lines, out)? else {
        return Ok(());
    };

    if universe.set_center(name.clone()).is_err() {
        let notice = format!(
            "{name} is not in this universe; the center is still {}.",
            universe.center()
        );
        writeln!(out, "{}", notice.yellow())?;
        return Ok(());
    }

    writeln!(
        out,
        "{} is the new center of the universe.",
        universe.center().cyan()
    )?;
    Ok(())
}

fn print_average(universe: &Universe, out: &mut impl Write) -> Result<()> {
    writeln!(
        out,
        "Average separation for the center {} is {}.",
        universe.center(),
        universe.average_separation()
    )?;
    Ok(())
}

// Reads the next line as an actor name. None means the input ended
// mid-prompt; the caller bails out and the session ends cleanly.
fn prompt_name(
    prompt: &str,
    lines: &mut impl Iterator<Item = io::Result<String>>,
    out: &mut impl Write,
) -> Result<Option<String>> {
    writeln!(out, "{}", prompt.dimmed())?;
    write!(out, "> ")?;
    out.flush()?;

    match lines.next() {
        Some(line) => Ok(Some(line?.trim().to_string())),
        None => Ok(None),
    }
}

fn plural(n: usize) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}

fn fmt_movies(movies: &BTreeSet<String>) -> String {
    let list = movies.iter().map(String::as_str).collect::<Vec<_>>();
    format!("[{}]", list.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural_suffix() {
        assert_eq!(plural(0), "s");
        assert_eq!(plural(1), "");
        assert_eq!(plural(2), "s");
    }

    #[test]
    fn test_movie_sets_render_sorted_and_bracketed() {
        let movies = BTreeSet::from(["E Movie".to_string(), "A Movie".to_string()]);
        assert_eq!(fmt_movies(&movies), "[A Movie, E Movie]");
    }
}
