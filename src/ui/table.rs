use crate::parcel::Parcel;
use crate::storage::StoreStats;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
pub struct TableRow {
    #[tabled(rename = "Metric")]
    pub metric: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

#[derive(Tabled)]
pub struct ParcelRow {
    #[tabled(rename = "Number")]
    pub number: i64,
    #[tabled(rename = "Client")]
    pub client: i64,
    #[tabled(rename = "Status")]
    pub status: String,
    #[tabled(rename = "Address")]
    pub address: String,
    #[tabled(rename = "Created")]
    pub created_at: String,
}

impl From<&Parcel> for ParcelRow {
    fn from(parcel: &Parcel) -> Self {
        Self {
            number: parcel.number,
            client: parcel.client,
            status: parcel.status.to_string(),
            address: parcel.address.clone(),
            created_at: parcel.created_at.clone(),
        }
    }
}

#[derive(Default)]
pub struct TableBuilder {
    rows: Vec<TableRow>,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_row(&mut self, label: &str, value: &str) {
        self.rows.push(TableRow {
            metric: label.to_string(),
            value: value.to_string(),
        });
    }

    pub fn build(&self) -> String {
        if self.rows.is_empty() {
            return String::new();
        }

        Table::new(&self.rows).with(Style::rounded()).to_string()
    }
}

pub fn stats_table(stats: &StoreStats) -> String {
    let mut builder = TableBuilder::new();
    builder.add_row("Parcels", &stats.total.to_string());
    builder.add_row("Registered", &stats.registered.to_string());
    builder.add_row("Sent", &stats.sent.to_string());
    builder.add_row("Delivered", &stats.delivered.to_string());
    builder.build()
}

pub fn parcel_table(parcels: &[Parcel]) -> String {
    if parcels.is_empty() {
        return String::new();
    }

    let rows: Vec<ParcelRow> = parcels.iter().map(ParcelRow::from).collect();
    Table::new(&rows).with(Style::rounded()).to_string()
}
