//! Factory Method pattern: the shipping step is shared, building the table is
//! left to each factory.

use crate::config::DemoConfig;
use crate::error::PatternResult;
use tracing::debug;

pub trait Table {
    fn material(&self) -> &'static str;
}

pub struct WoodTable;

impl Table for WoodTable {
    fn material(&self) -> &'static str {
        "wood"
    }
}

pub struct GlassTable;

impl Table for GlassTable {
    fn material(&self) -> &'static str {
        "glass"
    }
}

pub trait TableFactory {
    /// The factory method.
    fn build(&self) -> Box<dyn Table>;

    fn ship(&self) -> Box<dyn Table> {
        let table = self.build();
        debug!(material = table.material(), "shipping table");
        table
    }
}

pub struct WoodTableFactory;

impl TableFactory for WoodTableFactory {
    fn build(&self) -> Box<dyn Table> {
        Box::new(WoodTable)
    }
}

pub struct GlassTableFactory;

impl TableFactory for GlassTableFactory {
    fn build(&self) -> Box<dyn Table> {
        Box::new(GlassTable)
    }
}

pub fn demo(_config: &DemoConfig) -> PatternResult<Vec<String>> {
    let factories: [&dyn TableFactory; 2] = [&WoodTableFactory, &GlassTableFactory];
    Ok(factories
        .iter()
        .map(|factory| format!("shipped a {} table", factory.ship().material()))
        .collect())
}
