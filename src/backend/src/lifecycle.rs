use std::io::{self, Write};

use crate::error::TutorialError;

#[cfg(test)]
mod tests;

/// How far a tutorial program got before it shut down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Finished,
    InitFailed,
    LoadFailed,
    PresentFailed,
}

/// Runs the init, load and present phases in order, stopping at the first
/// failure, then releases everything that was acquired.
///
/// Media is always dropped before the context that owns the window and SDL,
/// whichever phase failed. Failures are reported here once and never returned.
pub fn run<Ctx, M, I, L, P>(init: I, load: L, present: P) -> Outcome
where
    I: FnOnce() -> Result<Ctx, TutorialError>,
    L: FnOnce(&Ctx) -> Result<M, TutorialError>,
    P: FnOnce(&mut Ctx, &M) -> Result<(), String>,
{
    let mut ctx = match init() {
        Ok(ctx) => ctx,
        Err(e) => {
            report("Cannot initialize!", &e.to_string());
            return Outcome::InitFailed;
        }
    };
    log::debug!("initialized");

    let outcome = match load(&ctx) {
        Ok(media) => {
            log::debug!("media loaded");
            let outcome = match present(&mut ctx, &media) {
                Ok(()) => Outcome::Finished,
                Err(e) => {
                    report("Presentation stopped!", &e);
                    Outcome::PresentFailed
                }
            };
            drop(media);
            outcome
        }
        Err(e) => {
            report("Cannot load media!", &e.to_string());
            Outcome::LoadFailed
        }
    };

    drop(ctx);
    log::debug!("resources released");
    outcome
}

fn report(what: &str, detail: &str) {
    let _ = report_to(&mut io::stdout().lock(), what, detail);
    log::debug!("reported failure: {what}");
}

/// Writes the single console line a failed phase produces.
fn report_to<W: Write>(out: &mut W, what: &str, detail: &str) -> io::Result<()> {
    writeln!(out, "{what} {detail}")
}
