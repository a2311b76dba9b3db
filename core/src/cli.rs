use crate::types::SunsetPrediction;

/// Enkel tekstrapport for en kjøring – én blokk per dag med
/// forklaringstabellen under.
pub fn print_forecast_report(predictions: &[SunsetPrediction]) {
    println!("--- Solnedgangsvarsel ---");
    if predictions.is_empty() {
        println!("(ingen dager innenfor varselhorisonten)");
        return;
    }

    for p in predictions {
        println!(
            "{}  solnedgang {} UTC  score {:>3} ({})",
            p.date,
            p.sunset.format("%H:%M"),
            p.score,
            p.label.as_str()
        );
        for row in &p.explanation.rows {
            let note = match &row.note {
                Some(n) => format!("  [{n}]"),
                None => String::new(),
            };
            println!(
                "  {:<14} s={:.2} w={:.2} → {:>5.1}{}",
                row.label, row.score, row.weight, row.contribution, note
            );
        }
        println!("  formel: {}", p.explanation.formula);
    }
}
