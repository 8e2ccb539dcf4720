mod config;
mod demo;

use config::{DemoConfig, OutputFormat};

fn main() -> anyhow::Result<()> {
    bistro_observability::init();
    let config = DemoConfig::from_env();

    println!("{}\n", demo::menu_board());

    let mut order = demo::sample_order()?;
    tracing::info!(
        order_id = %order.id_typed(),
        price = order.calculate_price(),
        calories = order.calculate_calories(),
        "order assembled"
    );

    if let Some(refused) = demo::close_and_try_edit(&mut order)? {
        tracing::warn!(order_id = %order.id_typed(), "edit after close refused: {refused}");
    }

    match config.output {
        OutputFormat::Text => println!("{order}"),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&order.summary())?),
    }

    Ok(())
}
