use anyhow::Result;
use chrono::Local;
use clap::{Parser, Subcommand, ValueEnum};
use client_core::{
    forms::{LineField, QaField, ShipmentField, StorageField},
    load_settings, InventoryPage, QaPage, ShipmentsPage, StorageAssignmentsPage, WarehouseClient,
};
use shared::{
    domain::{AssignmentId, AssignmentStatus},
    error::ActionFailure,
};
use tracing_subscriber::EnvFilter;

mod clock;
mod render;

#[derive(Parser, Debug)]
#[command(name = "warehouse-dashboard", about = "Warehouse operations dashboard")]
struct Cli {
    /// Overrides WAREHOUSE_API_URL / APP__API_BASE_URL / dashboard.toml.
    #[arg(long, global = true)]
    api_url: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    #[command(subcommand)]
    Inventory(InventoryCommand),
    #[command(subcommand)]
    Qa(QaCommand),
    #[command(subcommand)]
    Shipments(ShipmentCommand),
    #[command(subcommand)]
    Assignments(AssignmentCommand),
    /// Fetch a page once and keep redrawing its clock every minute.
    Watch {
        #[arg(value_enum)]
        page: WatchPage,
    },
}

#[derive(Subcommand, Debug)]
enum InventoryCommand {
    Location { location_id: String },
    Item { item_id: String },
}

#[derive(Subcommand, Debug)]
enum QaCommand {
    List,
    Create {
        #[arg(long)]
        gate_in_id: String,
        /// Expected range 1-5.
        #[arg(long, default_value = "5")]
        driver_rating: String,
        /// Expected range 1-5.
        #[arg(long, default_value = "5")]
        item_quality_rating: String,
        #[arg(long, default_value = "")]
        remarks: String,
        #[arg(long)]
        inspected_by_id: String,
    },
    GateIn { gate_in_id: String },
}

#[derive(Subcommand, Debug)]
enum ShipmentCommand {
    List,
    Create {
        #[arg(long)]
        expected_arrival_date: String,
        #[arg(long)]
        driver_name: String,
        #[arg(long)]
        truck_number: String,
        #[arg(long)]
        supplier_name: String,
        #[arg(long, default_value = "1")]
        warehouse_id: String,
        #[arg(long, default_value = "")]
        remarks: String,
        /// ITEM_ID:EXPECTED_QUANTITY, repeatable.
        #[arg(long = "line", value_parser = parse_line, required = true)]
        lines: Vec<(String, String)>,
    },
    Show { shipment_id: String },
    Link { shipment_id: String, gate_in_id: String },
}

#[derive(Subcommand, Debug)]
enum AssignmentCommand {
    List {
        #[arg(long, value_enum)]
        status: Option<StatusArg>,
    },
    Storekeepers,
    Create {
        #[arg(long)]
        gate_in_line_id: String,
        #[arg(long, default_value = "")]
        assigned_to_id: String,
        #[arg(long)]
        target_location_id: String,
        #[arg(long)]
        quantity: String,
    },
    Complete {
        assignment_id: i64,
        #[arg(long, default_value = "")]
        remarks: String,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum StatusArg {
    Assigned,
    InProgress,
    Completed,
}

impl From<StatusArg> for AssignmentStatus {
    fn from(value: StatusArg) -> Self {
        match value {
            StatusArg::Assigned => AssignmentStatus::Assigned,
            StatusArg::InProgress => AssignmentStatus::InProgress,
            StatusArg::Completed => AssignmentStatus::Completed,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum WatchPage {
    Qa,
    Shipments,
    Assignments,
}

fn parse_line(raw: &str) -> Result<(String, String), String> {
    match raw.split_once(':') {
        Some((item, quantity)) if !item.trim().is_empty() => {
            Ok((item.trim().to_string(), quantity.trim().to_string()))
        }
        _ => Err(format!("expected ITEM_ID:EXPECTED_QUANTITY, got '{raw}'")),
    }
}

/// Prints the page, then surfaces a failed action as the process error.
fn show(rendered: String, outcome: Result<(), ActionFailure>) -> Result<()> {
    print!("{rendered}");
    outcome?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();

    let settings = load_settings().with_api_base_url(cli.api_url);
    let client = WarehouseClient::from_settings(&settings)?;
    tracing::debug!(base_url = %client.base_url(), "dashboard starting");

    match cli.command {
        Command::Inventory(command) => {
            let mut page = InventoryPage::new(client);
            let outcome = match command {
                InventoryCommand::Location { location_id } => {
                    page.search_by_location(&location_id).await
                }
                InventoryCommand::Item { item_id } => page.search_by_item(&item_id).await,
            };
            show(render::inventory(&page, Local::now()), outcome)
        }
        Command::Qa(command) => {
            let mut page = QaPage::new(client);
            match command {
                QaCommand::List => {
                    let outcome = page.load().await;
                    show(render::qa(&page, Local::now()), outcome)
                }
                QaCommand::Create {
                    gate_in_id,
                    driver_rating,
                    item_quality_rating,
                    remarks,
                    inspected_by_id,
                } => {
                    page.edit(QaField::GateInId, gate_in_id);
                    page.edit(QaField::DriverRating, driver_rating);
                    page.edit(QaField::ItemQualityRating, item_quality_rating);
                    page.edit(QaField::QaRemarks, remarks);
                    page.edit(QaField::InspectedById, inspected_by_id);
                    let outcome = page.submit().await;
                    show(render::qa(&page, Local::now()), outcome)
                }
                QaCommand::GateIn { gate_in_id } => {
                    let outcome = page.lookup_by_gate_in(&gate_in_id).await;
                    show(render::qa_lookup(&page, Local::now()), outcome)
                }
            }
        }
        Command::Shipments(command) => {
            let mut page = ShipmentsPage::new(client);
            match command {
                ShipmentCommand::List => {
                    let outcome = page.load().await;
                    show(render::shipments(&page, Local::now()), outcome)
                }
                ShipmentCommand::Create {
                    expected_arrival_date,
                    driver_name,
                    truck_number,
                    supplier_name,
                    warehouse_id,
                    remarks,
                    lines,
                } => {
                    page.edit(ShipmentField::ExpectedArrivalDate, expected_arrival_date);
                    page.edit(ShipmentField::DriverName, driver_name);
                    page.edit(ShipmentField::TruckNumber, truck_number);
                    page.edit(ShipmentField::SupplierName, supplier_name);
                    page.edit(ShipmentField::WarehouseId, warehouse_id);
                    page.edit(ShipmentField::Remarks, remarks);
                    for (index, (item_id, quantity)) in lines.into_iter().enumerate() {
                        if index > 0 {
                            page.add_line();
                        }
                        page.edit_line(index, LineField::ItemId, item_id);
                        page.edit_line(index, LineField::ExpectedQuantity, quantity);
                    }
                    let outcome = page.submit().await;
                    show(render::shipments(&page, Local::now()), outcome)
                }
                ShipmentCommand::Show { shipment_id } => {
                    let outcome = page.lookup(&shipment_id).await;
                    show(render::shipment_detail(&page, Local::now()), outcome)
                }
                ShipmentCommand::Link {
                    shipment_id,
                    gate_in_id,
                } => {
                    let outcome = page.link_gate_in(&shipment_id, &gate_in_id).await;
                    show(render::shipments(&page, Local::now()), outcome)
                }
            }
        }
        Command::Assignments(command) => {
            let mut page = StorageAssignmentsPage::new(client);
            match command {
                AssignmentCommand::List { status } => {
                    page.set_status_filter(status.map(AssignmentStatus::from));
                    let outcome = page.load().await;
                    show(render::assignments(&page, Local::now()), outcome)
                }
                AssignmentCommand::Storekeepers => {
                    let outcome = page.load_storekeepers().await;
                    show(render::storekeepers(&page, Local::now()), outcome)
                }
                AssignmentCommand::Create {
                    gate_in_line_id,
                    assigned_to_id,
                    target_location_id,
                    quantity,
                } => {
                    page.edit(StorageField::GateInLineId, gate_in_line_id);
                    page.edit(StorageField::AssignedToId, assigned_to_id);
                    page.edit(StorageField::TargetLocationId, target_location_id);
                    page.edit(StorageField::QuantityToStore, quantity);
                    let outcome = page.submit().await;
                    show(render::assignments(&page, Local::now()), outcome)
                }
                AssignmentCommand::Complete {
                    assignment_id,
                    remarks,
                } => {
                    page.edit_completion_remarks(remarks);
                    let outcome = page.complete(AssignmentId(assignment_id)).await;
                    show(render::assignments(&page, Local::now()), outcome)
                }
            }
        }
        Command::Watch { page } => watch(client, page).await,
    }
}

async fn watch(client: WarehouseClient, page: WatchPage) -> Result<()> {
    let stop = async {
        let _ = tokio::signal::ctrl_c().await;
    };
    match page {
        WatchPage::Qa => {
            let mut page = QaPage::new(client);
            page.load().await?;
            clock::redraw_every_tick(|now| print!("{}", render::qa(&page, now)), stop).await;
        }
        WatchPage::Shipments => {
            let mut page = ShipmentsPage::new(client);
            page.load().await?;
            clock::redraw_every_tick(|now| print!("{}", render::shipments(&page, now)), stop)
                .await;
        }
        WatchPage::Assignments => {
            let mut page = StorageAssignmentsPage::new(client);
            page.load().await?;
            clock::redraw_every_tick(|now| print!("{}", render::assignments(&page, now)), stop)
                .await;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_shipment_line_pairs() {
        assert_eq!(
            parse_line(" 12 : 40 "),
            Ok(("12".to_string(), "40".to_string()))
        );
        assert!(parse_line("12").is_err());
        assert!(parse_line(":5").is_err());
    }

    #[test]
    fn cli_parses_repeated_lines_and_status_filter() {
        let cli = Cli::try_parse_from([
            "warehouse-dashboard",
            "shipments",
            "create",
            "--expected-arrival-date",
            "2024-06-01",
            "--driver-name",
            "Ana",
            "--truck-number",
            "KA-01",
            "--supplier-name",
            "Acme",
            "--line",
            "1:10",
            "--line",
            "2:5",
        ])
        .expect("parse");
        match cli.command {
            Command::Shipments(ShipmentCommand::Create { lines, warehouse_id, .. }) => {
                assert_eq!(lines.len(), 2);
                assert_eq!(warehouse_id, "1");
            }
            other => panic!("unexpected command {other:?}"),
        }

        let cli = Cli::try_parse_from([
            "warehouse-dashboard",
            "--api-url",
            "http://10.0.0.2/api",
            "assignments",
            "list",
            "--status",
            "in-progress",
        ])
        .expect("parse");
        assert_eq!(cli.api_url.as_deref(), Some("http://10.0.0.2/api"));
        assert!(matches!(
            cli.command,
            Command::Assignments(AssignmentCommand::List {
                status: Some(StatusArg::InProgress)
            })
        ));
    }
}
