//! Builder pattern: one director, one recipe, different solutions.

use crate::config::DemoConfig;
use crate::error::PatternResult;
use std::fmt;

pub trait Solution: Default {
    fn add_water(&mut self, amount: u32);
    fn add_material(&mut self, amount: u32);
    fn water(&self) -> u32;
    fn material(&self) -> u32;
    fn material_name(&self) -> &'static str;
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SalineWater {
    water: u32,
    salt: u32,
}

impl Solution for SalineWater {
    fn add_water(&mut self, amount: u32) {
        self.water += amount;
    }

    fn add_material(&mut self, amount: u32) {
        self.salt += amount;
    }

    fn water(&self) -> u32 {
        self.water
    }

    fn material(&self) -> u32 {
        self.salt
    }

    fn material_name(&self) -> &'static str {
        "salt"
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SugaredWater {
    water: u32,
    sugar: u32,
}

impl Solution for SugaredWater {
    fn add_water(&mut self, amount: u32) {
        self.water += amount;
    }

    fn add_material(&mut self, amount: u32) {
        self.sugar += amount;
    }

    fn water(&self) -> u32 {
        self.water
    }

    fn material(&self) -> u32 {
        self.sugar
    }

    fn material_name(&self) -> &'static str {
        "sugar"
    }
}

pub struct SolutionBuilder<S: Solution> {
    solution: S,
}

impl<S: Solution> SolutionBuilder<S> {
    pub fn new() -> Self {
        Self {
            solution: S::default(),
        }
    }

    pub fn add_water(&mut self, amount: u32) -> &mut Self {
        self.solution.add_water(amount);
        self
    }

    pub fn add_material(&mut self, amount: u32) -> &mut Self {
        self.solution.add_material(amount);
        self
    }

    pub fn solution(&self) -> &S {
        &self.solution
    }

    pub fn build(self) -> S {
        self.solution
    }
}

impl<S: Solution> Default for SolutionBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}

/// Owns the recipe; the builder decides what gets dissolved.
pub struct SolutionDirector;

impl SolutionDirector {
    pub fn make<S: Solution>(builder: &mut SolutionBuilder<S>) {
        builder
            .add_water(50)
            .add_material(10)
            .add_water(100)
            .add_material(5);
    }
}

struct Summary<'a, S: Solution>(&'a S);

impl<S: Solution> fmt::Display for Summary<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "water={} {}={}",
            self.0.water(),
            self.0.material_name(),
            self.0.material()
        )
    }
}

pub fn demo(_config: &DemoConfig) -> PatternResult<Vec<String>> {
    let mut saline = SolutionBuilder::<SalineWater>::new();
    SolutionDirector::make(&mut saline);

    let mut sugared = SolutionBuilder::<SugaredWater>::new();
    SolutionDirector::make(&mut sugared);

    Ok(vec![
        format!("saline water: {}", Summary(saline.solution())),
        format!("sugared water: {}", Summary(sugared.solution())),
    ])
}
