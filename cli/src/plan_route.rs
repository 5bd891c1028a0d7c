use anyhow::Result;
use chrono::Utc;

use geom::{LonLat, UnitFmt};
use routes::{RouteIssue, RouteOptions};

pub fn run(
    from: LonLat,
    to: LonLat,
    options: Option<String>,
    issues: Option<String>,
    compare: bool,
) -> Result<()> {
    let opts = match options {
        Some(path) => RouteOptions::load(&path)?,
        None => RouteOptions::default(),
    };

    let mut all_issues: Vec<RouteIssue> = match issues {
        Some(path) => rtutil::read_json(&path)?,
        None => Vec::new(),
    };
    let now = Utc::now();
    let before = all_issues.len();
    all_issues.retain(|i| i.is_active_at(now));
    if all_issues.len() != before {
        info!(
            "Ignoring {} issues that aren't active right now",
            before - all_issues.len()
        );
    }

    let alternatives = routes::generate_route_alternatives(from, to, &all_issues, &opts);
    let fmt = UnitFmt::metric();
    for alt in &alternatives {
        info!(
            "{}: {}, {} with traffic",
            alt.name,
            alt.distance.to_string(&fmt),
            alt.duration_with_traffic.to_string(&fmt)
        );
    }

    if !compare {
        println!("{}", rtutil::to_json(&alternatives));
        return Ok(());
    }

    let best = match alternatives.iter().find(|a| a.recommended) {
        Some(x) => x,
        None => bail!("No alternative was recommended"),
    };
    let comparisons: Vec<_> = alternatives
        .iter()
        .filter(|a| a.id != best.id)
        .map(|a| (&a.id, routes::compare_routes(a, best)))
        .collect();
    println!("{}", rtutil::to_json(&comparisons));
    Ok(())
}
