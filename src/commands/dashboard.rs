use clap::Args;

use menuboard_core::{categories_of, Id, MenuBoard};

use super::{OutputFormat, Reported};

#[derive(Args)]
pub struct DashboardCommand {
    /// Work on this restaurant instead of the first one
    #[arg(long, short)]
    restaurant: Option<Id>,

    /// Only show this category
    #[arg(long)]
    category: Option<Id>,

    /// Output format
    #[arg(long, short, value_enum, default_value = "text")]
    format: OutputFormat,
}

impl DashboardCommand {
    pub async fn run(&self, board: &MenuBoard) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(id) = self.restaurant {
            board.selection.select(Some(id));
        }
        board.mount().await;

        let current = board.selection.current();
        // A selection with nothing cached means the load failed and was reported.
        if current.is_none() && board.selection.selected().is_some() {
            return Err(Reported.into());
        }
        if let Some(id) = self.restaurant {
            if current.as_ref().map(|r| r.id) != Some(id) {
                return Err(format!("Restaurant not found: {}", id).into());
            }
        }
        let Some(current) = current else {
            println!("No restaurants to show.");
            return Ok(());
        };

        let menu = board.dashboard_menu(self.category);

        match self.format {
            OutputFormat::Json => {
                let payload = serde_json::json!({
                    "restaurant": current,
                    "selected_category": self.category,
                    "menu": menu,
                });
                println!("{}", serde_json::to_string_pretty(&payload)?);
            }
            OutputFormat::Text => {
                println!("Restaurants:");
                for restaurant in board.restaurants.snapshot() {
                    let marker = if restaurant.id == current.id { "*" } else { " " };
                    println!("  {} {:<6} {}", marker, restaurant.id, restaurant.name);
                }
                println!();

                let categories = board
                    .categories
                    .read(|all| categories_of(all, current.id).into_iter().cloned().collect::<Vec<_>>());
                if !categories.is_empty() {
                    let chips: Vec<String> = categories
                        .iter()
                        .map(|c| {
                            let marker = if Some(c.id) == self.category { "*" } else { "" };
                            format!("{}[{}] {} ({})", marker, c.icon(), c.name, c.id)
                        })
                        .collect();
                    println!("Categories: {}", chips.join("  "));
                    println!();
                }

                print!("{}", menu);
                println!("\nItems shown: {}", menu.item_count());
            }
        }
        Ok(())
    }
}
