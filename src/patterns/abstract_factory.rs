//! Abstract Factory pattern: each vehicle factory only produces parts that
//! belong together.

use crate::config::DemoConfig;
use crate::error::PatternResult;

pub trait Part {
    fn name(&self) -> &'static str;
}

pub struct CarEngine;
pub struct CarTire;
pub struct MotorbikeEngine;
pub struct MotorbikeTire;

impl Part for CarEngine {
    fn name(&self) -> &'static str {
        "car engine"
    }
}

impl Part for CarTire {
    fn name(&self) -> &'static str {
        "car tire"
    }
}

impl Part for MotorbikeEngine {
    fn name(&self) -> &'static str {
        "motorbike engine"
    }
}

impl Part for MotorbikeTire {
    fn name(&self) -> &'static str {
        "motorbike tire"
    }
}

fn describe(engine: &dyn Part, tire: &dyn Part) -> String {
    format!("{} and {}", engine.name(), tire.name())
}

pub trait VehicleFactory {
    fn engine(&self) -> Box<dyn Part>;
    fn tire(&self) -> Box<dyn Part>;

    fn status(&self) -> String {
        describe(self.engine().as_ref(), self.tire().as_ref())
    }
}

pub struct Car;

impl VehicleFactory for Car {
    fn engine(&self) -> Box<dyn Part> {
        Box::new(CarEngine)
    }

    fn tire(&self) -> Box<dyn Part> {
        Box::new(CarTire)
    }
}

pub struct Motorbike;

impl VehicleFactory for Motorbike {
    fn engine(&self) -> Box<dyn Part> {
        Box::new(MotorbikeEngine)
    }

    fn tire(&self) -> Box<dyn Part> {
        Box::new(MotorbikeTire)
    }
}

/// Hand-assembled vehicle. Nothing stops a mismatched pair of parts here,
/// which is what the factories above rule out.
pub struct Vehicle {
    engine: Box<dyn Part>,
    tire: Box<dyn Part>,
}

impl Vehicle {
    pub fn assemble(engine: Box<dyn Part>, tire: Box<dyn Part>) -> Self {
        Self { engine, tire }
    }

    pub fn status(&self) -> String {
        describe(self.engine.as_ref(), self.tire.as_ref())
    }
}

pub fn demo(_config: &DemoConfig) -> PatternResult<Vec<String>> {
    let mismatched = Vehicle::assemble(Box::new(CarEngine), Box::new(MotorbikeTire));
    let factories: [&dyn VehicleFactory; 2] = [&Car, &Motorbike];

    let mut lines = vec![format!("hand assembled: {}", mismatched.status())];
    lines.extend(factories.iter().map(|f| format!("factory: {}", f.status())));
    Ok(lines)
}
