use clap::{Args, Subcommand};
use std::path::PathBuf;

use menuboard_core::{Id, MenuBoard, NewRestaurant, RestaurantUpdate, Upload};

use super::{confirm, truncate, OutputFormat, Reported};

#[derive(Args)]
pub struct RestaurantCommand {
    #[command(subcommand)]
    pub command: RestaurantSubcommand,
}

#[derive(Subcommand)]
pub enum RestaurantSubcommand {
    /// List restaurants
    List {
        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Show a restaurant's details
    Show {
        /// Restaurant ID
        id: Id,

        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Create a new restaurant
    Create {
        /// Name of the restaurant
        name: String,

        /// Address or neighbourhood
        #[arg(long)]
        location: Option<String>,

        /// Opening hours, free text
        #[arg(long)]
        hours: Option<String>,

        /// Contact email
        #[arg(long)]
        email: Option<String>,

        /// Contact phone
        #[arg(long)]
        phone: Option<String>,
    },

    /// Update an existing restaurant
    Update {
        /// Restaurant ID
        id: Id,

        /// New name
        #[arg(long)]
        name: Option<String>,

        /// New location
        #[arg(long)]
        location: Option<String>,

        /// New opening hours
        #[arg(long)]
        hours: Option<String>,

        /// New contact email
        #[arg(long)]
        email: Option<String>,

        /// New contact phone
        #[arg(long)]
        phone: Option<String>,

        /// Logo image to upload
        #[arg(long, value_name = "PATH")]
        logo: Option<PathBuf>,
    },

    /// Delete a restaurant
    Delete {
        /// Restaurant ID
        id: Id,

        /// Skip confirmation prompt
        #[arg(long, short)]
        force: bool,
    },
}

impl RestaurantCommand {
    pub async fn run(&self, board: &MenuBoard) -> Result<(), Box<dyn std::error::Error>> {
        let restaurants = &board.restaurants;

        match &self.command {
            RestaurantSubcommand::List { format } => {
                if !restaurants.fetch_all().await {
                    return Err(Reported.into());
                }
                let all = restaurants.snapshot();

                if all.is_empty() {
                    println!("No restaurants found");
                    return Ok(());
                }

                match format {
                    OutputFormat::Json => {
                        println!("{}", serde_json::to_string_pretty(&all)?);
                    }
                    OutputFormat::Text => {
                        println!("{:<8}  {:<30}  LOCATION", "ID", "NAME");
                        println!("{}", "-".repeat(70));
                        for restaurant in &all {
                            println!(
                                "{:<8}  {:<30}  {}",
                                restaurant.id,
                                truncate(&restaurant.name, 30),
                                restaurant.location
                            );
                        }
                        println!("\nTotal: {} restaurant(s)", all.len());
                    }
                }
                Ok(())
            }

            RestaurantSubcommand::Show { id, format } => {
                let restaurant = restaurants.fetch_one(*id).await.ok_or(Reported)?;
                match format {
                    OutputFormat::Json => {
                        println!("{}", serde_json::to_string_pretty(&restaurant)?);
                    }
                    OutputFormat::Text => {
                        print!("{}", restaurant);
                    }
                }
                Ok(())
            }

            RestaurantSubcommand::Create {
                name,
                location,
                hours,
                email,
                phone,
            } => {
                if name.trim().is_empty() {
                    return Err("Restaurant name cannot be empty".into());
                }

                let mut new = NewRestaurant::new(name.trim());
                if let Some(location) = location {
                    new = new.with_location(location);
                }
                if let Some(hours) = hours {
                    new = new.with_opening_hours(hours);
                }
                if let Some(email) = email {
                    new = new.with_contact_email(email);
                }
                if let Some(phone) = phone {
                    new = new.with_contact_phone(phone);
                }

                let created = restaurants.add(new).await.ok_or(Reported)?;
                println!("Created restaurant:");
                print!("{}", created);
                Ok(())
            }

            RestaurantSubcommand::Update {
                id,
                name,
                location,
                hours,
                email,
                phone,
                logo,
            } => {
                let current = restaurants.fetch_one(*id).await.ok_or(Reported)?;
                let mut update = RestaurantUpdate::from(&current);

                if let Some(name) = name {
                    if name.trim().is_empty() {
                        return Err("Restaurant name cannot be empty".into());
                    }
                    update.name = name.trim().to_string();
                }
                if let Some(location) = location {
                    update.location = location.clone();
                }
                if let Some(hours) = hours {
                    update.opening_hours = hours.clone();
                }
                if let Some(email) = email {
                    update.contact_email = email.clone();
                }
                if let Some(phone) = phone {
                    update.contact_phone = phone.clone();
                }
                if let Some(path) = logo {
                    let upload = Upload::from_path(path)
                        .map_err(|e| format!("Failed to read logo '{}': {}", path.display(), e))?;
                    update.logo = Some(upload);
                }

                let updated = restaurants.modify(*id, update).await.ok_or(Reported)?;
                println!("Updated restaurant:");
                print!("{}", updated);
                Ok(())
            }

            RestaurantSubcommand::Delete { id, force } => {
                let restaurant = restaurants.fetch_one(*id).await.ok_or(Reported)?;

                if !force && !confirm(&format!("Delete restaurant '{}'?", restaurant.name))? {
                    println!("Deletion cancelled.");
                    return Ok(());
                }

                if !restaurants.remove(*id).await {
                    return Err(Reported.into());
                }
                println!("Deleted restaurant: {}", restaurant.name);
                Ok(())
            }
        }
    }
}
