use clap::{Args, Subcommand};

use menuboard_core::{categories_of, Icon, Id, MenuBoard, MenuCategoryUpdate, NewMenuCategory};

use super::{confirm, truncate, OutputFormat, Reported};

#[derive(Args)]
pub struct CategoryCommand {
    #[command(subcommand)]
    pub command: CategorySubcommand,
}

#[derive(Subcommand)]
pub enum CategorySubcommand {
    /// List menu categories
    List {
        /// Only categories of this restaurant
        #[arg(long, short)]
        restaurant: Option<Id>,

        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Create a menu category
    Create {
        /// Name of the category
        name: String,

        /// Restaurant the category belongs to
        #[arg(long, short)]
        restaurant: Id,

        /// Short description
        #[arg(long)]
        description: Option<String>,

        /// Icon name (utensils, soup, salad, pizza, ...)
        #[arg(long)]
        icon: Option<Icon>,
    },

    /// Update a menu category
    Update {
        /// Category ID
        id: Id,

        /// New name
        #[arg(long)]
        name: Option<String>,

        /// New description
        #[arg(long)]
        description: Option<String>,

        /// New icon name
        #[arg(long)]
        icon: Option<Icon>,

        /// Move to another restaurant
        #[arg(long, short)]
        restaurant: Option<Id>,
    },

    /// Delete a menu category
    Delete {
        /// Category ID
        id: Id,

        /// Skip confirmation prompt
        #[arg(long, short)]
        force: bool,
    },
}

impl CategoryCommand {
    pub async fn run(&self, board: &MenuBoard) -> Result<(), Box<dyn std::error::Error>> {
        let categories = &board.categories;

        match &self.command {
            CategorySubcommand::List { restaurant, format } => {
                if !categories.fetch_all().await {
                    return Err(Reported.into());
                }
                let all = categories.snapshot();
                let shown: Vec<_> = match restaurant {
                    Some(id) => categories_of(&all, *id).into_iter().cloned().collect(),
                    None => all,
                };

                if shown.is_empty() {
                    println!("No categories found");
                    return Ok(());
                }

                match format {
                    OutputFormat::Json => {
                        println!("{}", serde_json::to_string_pretty(&shown)?);
                    }
                    OutputFormat::Text => {
                        println!("{:<8}  {:<30}  {:<10}  RESTAURANT", "ID", "NAME", "ICON");
                        println!("{}", "-".repeat(70));
                        for category in &shown {
                            println!(
                                "{:<8}  {:<30}  {:<10}  {}",
                                category.id,
                                truncate(&category.name, 30),
                                category.icon(),
                                category.restaurant
                            );
                        }
                        println!("\nTotal: {} category(ies)", shown.len());
                    }
                }
                Ok(())
            }

            CategorySubcommand::Create {
                name,
                restaurant,
                description,
                icon,
            } => {
                if name.trim().is_empty() {
                    return Err("Category name cannot be empty".into());
                }

                let mut new = NewMenuCategory::new(name.trim(), *restaurant);
                if let Some(description) = description {
                    new = new.with_description(description);
                }
                if let Some(icon) = icon {
                    new = new.with_icon(*icon);
                }

                let created = categories.add(new).await.ok_or(Reported)?;
                println!("Created category [{}] {} (ID {})", created.icon(), created.name, created.id);
                Ok(())
            }

            CategorySubcommand::Update {
                id,
                name,
                description,
                icon,
                restaurant,
            } => {
                let current = categories.fetch_one(*id).await.ok_or(Reported)?;
                let mut update = MenuCategoryUpdate::from(&current);

                if let Some(name) = name {
                    if name.trim().is_empty() {
                        return Err("Category name cannot be empty".into());
                    }
                    update.name = name.trim().to_string();
                }
                if let Some(description) = description {
                    update.description = Some(description.clone());
                }
                if let Some(icon) = icon {
                    update.icon_name = *icon;
                }
                if let Some(restaurant) = restaurant {
                    update.restaurant = *restaurant;
                }

                let updated = categories.modify(*id, update).await.ok_or(Reported)?;
                println!("Updated category [{}] {} (ID {})", updated.icon(), updated.name, updated.id);
                Ok(())
            }

            CategorySubcommand::Delete { id, force } => {
                let category = categories.fetch_one(*id).await.ok_or(Reported)?;

                if !force && !confirm(&format!("Delete category '{}'?", category.name))? {
                    println!("Deletion cancelled.");
                    return Ok(());
                }

                if !categories.remove(*id).await {
                    return Err(Reported.into());
                }
                println!("Deleted category: {}", category.name);
                Ok(())
            }
        }
    }
}
