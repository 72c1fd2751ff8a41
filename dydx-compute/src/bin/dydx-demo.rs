use dydx_compute::symbolic::{self, cos, e, log10, num, pi, sin, sym, tan, Expr, DEFAULT_SYMBOL};
use log::info;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use std::collections::HashMap;

/// Parses a log level name (any case), falling back to `warn` when it is missing or unknown.
fn parse_log_level(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|s| s.parse().ok())
        .unwrap_or(LevelFilter::Warn)
}

/// Reads the log level from the `DYDX_LOG` environment variable.
fn log_level() -> LevelFilter {
    parse_log_level(std::env::var("DYDX_LOG").ok().as_deref())
}

fn show(expr: &Expr) {
    let src = expr.to_string();
    println!("f(x)      = {}", src);
    println!("f'(x)     = {}", expr.dx());

    match expr.integrate_dx() {
        Ok(integral) => println!("∫ f(x) dx = {}", integral),
        Err(err) => err.report_to_stderr(&src),
    }

    match expr.eval_f64() {
        Ok(value) => println!("f         = {}", value),
        Err(err) => {
            err.report_to_stderr(&src);
            let at_one = expr.subst(&HashMap::from([(DEFAULT_SYMBOL, num(1))]));
            match at_one.eval_f64() {
                Ok(value) => println!("f(1)      = {}", value),
                Err(err) => err.report_to_stderr(&at_one.to_string()),
            }
        },
    }
    println!();
}

fn main() {
    if TermLogger::init(log_level(), Config::default(), TerminalMode::Mixed, ColorChoice::Auto).is_err() {
        eprintln!("failed to initialize the logger");
    }

    let x = sym(DEFAULT_SYMBOL);
    let samples = [
        num(3),
        pi() / 2,
        sin(pi() * 3 / 2),
        symbolic::log(e()),
        sin(x.clone()),
        cos(x.clone()),
        tan(x.clone() * 2),
        symbolic::log(x.clone() * sym("y")),
        log10(x.clone().pow(3)),
        x.clone().pow(2) + x.clone() * 5 + 6,
    ];

    info!("evaluating {} sample expressions", samples.len());
    for expr in &samples {
        show(expr);
    }
}
