use clap::Args;
use receipt_processor::error::AppError;
use receipt_processor::receipts::{Receipt, ReceiptValidator, ScoreCard, ScoringEngine};
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Receipt JSON file; reads stdin when omitted or "-"
    pub(crate) path: Option<PathBuf>,
    /// Print the score card as JSON instead of a text breakdown
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let raw = read_input(args.path.as_deref())?;
    let (receipt, card) = score_document(&raw)?;

    if args.json {
        println!("{}", render_json(&card)?);
    } else {
        print!("{}", render_breakdown(&receipt, &card));
    }

    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<String, AppError> {
    match path {
        Some(path) if path != Path::new("-") => Ok(std::fs::read_to_string(path)?),
        _ => {
            let mut raw = String::new();
            std::io::stdin().read_to_string(&mut raw)?;
            Ok(raw)
        }
    }
}

fn score_document(raw: &str) -> Result<(Receipt, ScoreCard), AppError> {
    let receipt: Receipt = serde_json::from_str(raw)?;
    ReceiptValidator::new()?.validate(&receipt)?;
    let card = ScoringEngine::default().score(&receipt);
    Ok((receipt, card))
}

fn render_json(card: &ScoreCard) -> Result<String, AppError> {
    serde_json::to_string_pretty(card).map_err(AppError::Encode)
}

fn render_breakdown(receipt: &Receipt, card: &ScoreCard) -> String {
    let mut out = format!(
        "Receipt from {} on {} at {} ({} item(s), total {})\n",
        receipt.retailer,
        receipt.purchase_date,
        receipt.purchase_time,
        receipt.items.len(),
        receipt.total
    );

    out.push_str("\nRule breakdown\n");
    for component in &card.components {
        out.push_str(&format!(
            "- {:<24} {:>4}  {}\n",
            component.rule.label(),
            component.points,
            component.notes
        ));
    }
    out.push_str(&format!("\nTotal: {} points\n", card.total));
    out
}
