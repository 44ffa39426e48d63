//! Facility-wide overhead cost model
//!
//! A flat additive model computed once per aggregation from plant-wide
//! aggregates. Overhead is inherently facility-wide, so it carries no
//! step-level granularity here; the distribution stage apportions it
//! across steps afterwards.

use crate::engine::crf::capital_recovery_factor;
use crate::entities::overhead::Overhead;
use crate::entities::part::Assembly;

/// The itemized overhead terms, each in annual dollars.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OverheadCost {
    /// Salary paid against the fractional remainder of production
    /// headcount rounding
    pub unused_labor: f64,
    pub management: f64,
    pub quality_assurance: f64,
    pub administration: f64,
    pub human_resources: f64,
    pub compliance: f64,
    pub legal: f64,
    pub insurance: f64,
    pub accounting: f64,
    /// Rent on office, inventory, and miscellaneous space plus
    /// annualized office buildout
    pub space: f64,
    pub cleaning: f64,
    pub supplies: f64,
    pub it_equipment: f64,
    pub packaging: f64,
    pub building_utilities: f64,
}

impl OverheadCost {
    /// Sum of every term ($ per year).
    pub fn annual_total(&self) -> f64 {
        self.unused_labor
            + self.management
            + self.quality_assurance
            + self.administration
            + self.human_resources
            + self.compliance
            + self.legal
            + self.insurance
            + self.accounting
            + self.space
            + self.cleaning
            + self.supplies
            + self.it_equipment
            + self.packaging
            + self.building_utilities
    }

    /// Overhead per accepted unit.
    pub fn per_unit(&self, annual_volume: f64) -> f64 {
        self.annual_total() / annual_volume
    }
}

/// Compute the itemized overhead cost from plant-wide aggregates.
///
/// `labor_headcount` and `production_space` are the totals accumulated
/// across every process step. Inventory space is zero when the assembly
/// has no height, which would otherwise divide by zero.
#[allow(clippy::too_many_arguments)]
pub fn overhead_cost(
    over: &Overhead,
    assembly: &Assembly,
    labor_headcount: f64,
    effective_volume: f64,
    labor_hours: f64,
    annual_volume: f64,
    rent: f64,
    production_space: f64,
    discount_rate: f64,
    salary: f64,
) -> OverheadCost {
    // unused production labor from headcount rounding
    let unused_headcount = labor_headcount.ceil() - labor_headcount;
    let unused_labor = salary * unused_headcount;

    // management
    let n_management = over.management_ratio * labor_headcount;
    let management = n_management * over.management_salary;

    // quality assurance
    let inspected_parts = (over.qa_inspect_fraction * effective_volume).ceil();
    let n_qa = inspected_parts * over.qa_time / labor_hours;
    let quality_assurance = n_qa * over.qa_salary;

    // administrative staff
    let n_admin = labor_headcount * over.admin_ratio;
    let administration = n_admin * over.admin_salary;

    // human resources, compliance
    let n_employees = labor_headcount + n_qa + n_management + n_admin;
    let human_resources = n_employees * over.hr_price;
    let compliance = over.compliance_cost * n_employees;

    // legal
    let legal_hours = annual_volume * over.legal_fraction;
    let legal = legal_hours * 12.0 * over.legal_price;

    let insurance = over.insurance_price;
    let accounting = 12.0 * over.accounting_price;

    // office space and buildout
    let n_office = n_admin + n_management + n_qa;
    let office_space = over.space_per_employee * n_office;
    let office_crf = capital_recovery_factor(discount_rate, over.office_life);
    let furnishing = office_crf * over.office_build_price * n_office;

    // inventory space from days of finished stock
    let units_in_inventory = annual_volume / 365.0 * over.inventory_days;
    let inventory_space = if assembly.height == 0.0 {
        0.0
    } else {
        let units_per_m2 =
            (over.inventory_stack_height / assembly.height) * 1.0 / assembly.footprint();
        units_in_inventory / units_per_m2
    };

    // misc space (hallways, storage, bathrooms)
    let misc_space =
        over.misc_space_fraction * (office_space + inventory_space + production_space);

    let overhead_space = office_space + inventory_space + misc_space;
    let space = rent * overhead_space + furnishing;

    let total_space = overhead_space + production_space;
    let cleaning = 12.0 * over.cleaning_price * total_space;

    let supplies = n_employees * over.supply_price;
    let it_equipment = n_employees * over.it_price;

    let packaging = over.crate_price * annual_volume;

    let building_utilities = over.building_utility_price * (overhead_space + production_space);

    OverheadCost {
        unused_labor,
        management,
        quality_assurance,
        administration,
        human_resources,
        compliance,
        legal,
        insurance,
        accounting,
        space,
        cleaning,
        supplies,
        it_equipment,
        packaging,
        building_utilities,
    }
}
