use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::OnceLock;

use super::super::catalog::{CatalogError, Locale, LocalizedText};
use super::super::verdict::dollars;

/// Benefit programs the screener knows how to evaluate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgramId {
    Snap,
    Medicaid,
    Chip,
    Wic,
    Liheap,
    Ssi,
    Tanf,
    Lifeline,
    Pell,
}

impl ProgramId {
    pub const ALL: [ProgramId; 9] = [
        ProgramId::Snap,
        ProgramId::Medicaid,
        ProgramId::Chip,
        ProgramId::Wic,
        ProgramId::Liheap,
        ProgramId::Ssi,
        ProgramId::Tanf,
        ProgramId::Lifeline,
        ProgramId::Pell,
    ];

    pub const fn key(self) -> &'static str {
        match self {
            ProgramId::Snap => "snap",
            ProgramId::Medicaid => "medicaid",
            ProgramId::Chip => "chip",
            ProgramId::Wic => "wic",
            ProgramId::Liheap => "liheap",
            ProgramId::Ssi => "ssi",
            ProgramId::Tanf => "tanf",
            ProgramId::Lifeline => "lifeline",
            ProgramId::Pell => "pell",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgramCategory {
    Food,
    Health,
    Utilities,
    Cash,
    Education,
}

impl ProgramCategory {
    pub const fn label(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (ProgramCategory::Food, Locale::En) => "Food Assistance",
            (ProgramCategory::Food, Locale::Es) => "Asistencia Alimentaria",
            (ProgramCategory::Health, Locale::En) => "Healthcare",
            (ProgramCategory::Health, Locale::Es) => "Atención Médica",
            (ProgramCategory::Utilities, Locale::En) => "Utilities & Phone",
            (ProgramCategory::Utilities, Locale::Es) => "Servicios y Teléfono",
            (ProgramCategory::Cash, Locale::En) => "Cash Assistance",
            (ProgramCategory::Cash, Locale::Es) => "Asistencia en Efectivo",
            (ProgramCategory::Education, Locale::En) => "Education",
            (ProgramCategory::Education, Locale::Es) => "Educación",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BenefitPeriod {
    Month,
    Year,
}

impl BenefitPeriod {
    const fn suffix(self) -> &'static str {
        match self {
            BenefitPeriod::Month => "month",
            BenefitPeriod::Year => "year",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoverageScope {
    Household,
    Children,
}

/// Structured benefit value; wording is left to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BenefitEstimate {
    UpTo {
        amount: u32,
        period: BenefitPeriod,
    },
    Range {
        low: u32,
        high: u32,
        period: BenefitPeriod,
        per_person: bool,
    },
    IndividualOrCouple {
        individual: u32,
        couple: u32,
        period: BenefitPeriod,
    },
    Discount {
        amount_cents: u32,
        period: BenefitPeriod,
    },
    Coverage {
        scope: CoverageScope,
    },
}

impl BenefitEstimate {
    /// English rendering for terminal output.
    pub fn label(&self) -> String {
        match self {
            BenefitEstimate::UpTo { amount, period } => {
                format!("Up to ${}/{}", dollars(*amount), period.suffix())
            }
            BenefitEstimate::Range {
                low,
                high,
                period,
                per_person,
            } => {
                let scope = if *per_person { " per person" } else { "" };
                format!(
                    "${}-${}/{}{}",
                    dollars(*low),
                    dollars(*high),
                    period.suffix(),
                    scope
                )
            }
            BenefitEstimate::IndividualOrCouple {
                individual,
                couple,
                period,
            } => format!(
                "Up to ${}/{} (individual) or ${}/{} (couple)",
                dollars(*individual),
                period.suffix(),
                dollars(*couple),
                period.suffix()
            ),
            BenefitEstimate::Discount {
                amount_cents,
                period,
            } => format!(
                "${}.{:02}/{} discount",
                amount_cents / 100,
                amount_cents % 100,
                period.suffix()
            ),
            BenefitEstimate::Coverage {
                scope: CoverageScope::Household,
            } => "Free or low-cost health insurance".to_string(),
            BenefitEstimate::Coverage {
                scope: CoverageScope::Children,
            } => "Free or low-cost health insurance for children".to_string(),
        }
    }
}

/// FY2025 maximum SNAP allotments for households of one through eight.
const SNAP_MAX_ALLOTMENTS: [u32; 8] = [292, 536, 768, 975, 1158, 1390, 1536, 1756];

/// Catalog record describing a benefit program.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Program {
    pub id: ProgramId,
    pub name: LocalizedText,
    pub description: LocalizedText,
    pub category: ProgramCategory,
    /// Percent-of-FPL cutoff, or `None` when the program has its own income rule.
    pub fpl_threshold: Option<u32>,
    pub apply_url: String,
}

impl Program {
    pub fn estimate_benefit(&self, household_size: u32) -> BenefitEstimate {
        match self.id {
            ProgramId::Snap => {
                let index = household_size.clamp(1, 8) as usize - 1;
                BenefitEstimate::UpTo {
                    amount: SNAP_MAX_ALLOTMENTS[index],
                    period: BenefitPeriod::Month,
                }
            }
            ProgramId::Medicaid => BenefitEstimate::Coverage {
                scope: CoverageScope::Household,
            },
            ProgramId::Chip => BenefitEstimate::Coverage {
                scope: CoverageScope::Children,
            },
            ProgramId::Wic => BenefitEstimate::Range {
                low: 50,
                high: 75,
                period: BenefitPeriod::Month,
                per_person: true,
            },
            ProgramId::Liheap => BenefitEstimate::Range {
                low: 200,
                high: 1000,
                period: BenefitPeriod::Year,
                per_person: false,
            },
            ProgramId::Ssi => BenefitEstimate::IndividualOrCouple {
                individual: 967,
                couple: 1450,
                period: BenefitPeriod::Month,
            },
            ProgramId::Tanf => BenefitEstimate::Range {
                low: 200,
                high: 700,
                period: BenefitPeriod::Month,
                per_person: false,
            },
            ProgramId::Lifeline => BenefitEstimate::Discount {
                amount_cents: 925,
                period: BenefitPeriod::Month,
            },
            ProgramId::Pell => BenefitEstimate::UpTo {
                amount: 7395,
                period: BenefitPeriod::Year,
            },
        }
    }
}

/// Ordered, duplicate-free set of programs. Order drives tie-breaking in reports.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgramCatalog {
    programs: Vec<Program>,
}

impl ProgramCatalog {
    pub fn from_programs(programs: Vec<Program>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for program in &programs {
            if !seen.insert(program.id) {
                return Err(CatalogError::DuplicateEntry(program.id.key()));
            }
        }
        Ok(Self { programs })
    }

    /// Shared instance of the built-in catalog.
    pub fn standard() -> &'static ProgramCatalog {
        static STANDARD: OnceLock<ProgramCatalog> = OnceLock::new();
        STANDARD.get_or_init(|| ProgramCatalog {
            programs: standard_programs(),
        })
    }

    pub fn programs(&self) -> &[Program] {
        &self.programs
    }

    pub fn get(&self, id: ProgramId) -> Option<&Program> {
        self.programs.iter().find(|program| program.id == id)
    }

    pub fn len(&self) -> usize {
        self.programs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.programs.is_empty()
    }
}

fn program(
    id: ProgramId,
    name: (&str, &str),
    category: ProgramCategory,
    description: (&str, &str),
    apply_url: &str,
    fpl_threshold: Option<u32>,
) -> Program {
    Program {
        id,
        name: LocalizedText::new(name.0, name.1),
        description: LocalizedText::new(description.0, description.1),
        category,
        fpl_threshold,
        apply_url: apply_url.to_string(),
    }
}

fn standard_programs() -> Vec<Program> {
    vec![
        program(
            ProgramId::Snap,
            ("SNAP (Food Stamps)", "SNAP (Cupones de Alimentos)"),
            ProgramCategory::Food,
            (
                "Monthly funds loaded onto an EBT card for buying groceries. Most households receive $200-$800+/month depending on size.",
                "Fondos mensuales cargados en una tarjeta EBT para comprar alimentos. La mayoría de los hogares reciben $200-$800+/mes según el tamaño.",
            ),
            "https://www.fns.usda.gov/snap/state-directory",
            Some(130),
        ),
        program(
            ProgramId::Medicaid,
            ("Medicaid", "Medicaid"),
            ProgramCategory::Health,
            (
                "Free or low-cost health coverage including doctor visits, hospital stays, prescriptions, mental health, and more.",
                "Cobertura de salud gratuita o de bajo costo que incluye visitas al médico, hospitalizaciones, recetas, salud mental y más.",
            ),
            "https://www.healthcare.gov/medicaid-chip/",
            Some(138),
        ),
        program(
            ProgramId::Chip,
            ("CHIP (Children's Health Insurance)", "CHIP (Seguro Médico para Niños)"),
            ProgramCategory::Health,
            (
                "Free or low-cost health coverage for children under 19 in families that earn too much for Medicaid but can't afford private insurance.",
                "Cobertura de salud gratuita o de bajo costo para niños menores de 19 años en familias que ganan demasiado para Medicaid pero no pueden pagar un seguro privado.",
            ),
            "https://www.healthcare.gov/medicaid-chip/",
            Some(200),
        ),
        program(
            ProgramId::Wic,
            ("WIC (Women, Infants, and Children)", "WIC (Mujeres, Bebés y Niños)"),
            ProgramCategory::Food,
            (
                "Provides nutritious foods, nutrition education, and healthcare referrals for pregnant and postpartum women, infants, and children under 5.",
                "Proporciona alimentos nutritivos, educación nutricional y referencias de atención médica para mujeres embarazadas y posparto, bebés y niños menores de 5 años.",
            ),
            "https://www.fns.usda.gov/wic/wic-how-apply",
            Some(185),
        ),
        program(
            ProgramId::Liheap,
            (
                "LIHEAP (Heating & Cooling Assistance)",
                "LIHEAP (Asistencia para Calefacción y Refrigeración)",
            ),
            ProgramCategory::Utilities,
            (
                "Helps pay heating and cooling bills. Can also help with energy-related home repairs and weatherization. Typical benefit is $200-$1,000/year.",
                "Ayuda a pagar facturas de calefacción y refrigeración. También puede ayudar con reparaciones y aislamiento del hogar. El beneficio típico es $200-$1,000/año.",
            ),
            "https://www.acf.hhs.gov/ocs/liheap-state-and-territory-contact-listing",
            Some(150),
        ),
        program(
            ProgramId::Ssi,
            (
                "SSI (Supplemental Security Income)",
                "SSI (Seguridad de Ingreso Suplementario)",
            ),
            ProgramCategory::Cash,
            (
                "Monthly cash payments for people who are 65+, blind, or have a disability and have very limited income and resources.",
                "Pagos mensuales en efectivo para personas mayores de 65 años, ciegas o con discapacidad y con ingresos y recursos muy limitados.",
            ),
            "https://www.ssa.gov/ssi/",
            None,
        ),
        program(
            ProgramId::Tanf,
            (
                "TANF (Temporary Cash Assistance)",
                "TANF (Asistencia Temporal en Efectivo)",
            ),
            ProgramCategory::Cash,
            (
                "Temporary cash assistance for families with children. Amounts and rules vary by state. Often includes job training and support services.",
                "Asistencia temporal en efectivo para familias con niños. Los montos y reglas varían según el estado. A menudo incluye capacitación laboral y servicios de apoyo.",
            ),
            "https://www.acf.hhs.gov/ofa/map/about/help-families",
            Some(100),
        ),
        program(
            ProgramId::Lifeline,
            (
                "Lifeline (Phone/Internet Discount)",
                "Lifeline (Descuento en Teléfono/Internet)",
            ),
            ProgramCategory::Utilities,
            (
                "Provides a $9.25/month discount on phone or internet service. Available to households on qualifying assistance programs or with income below 135% FPL.",
                "Proporciona un descuento de $9.25/mes en servicio de teléfono o internet. Disponible para hogares en programas de asistencia calificados o con ingresos por debajo del 135% del FPL.",
            ),
            "https://www.lifelinesupport.org/",
            Some(135),
        ),
        program(
            ProgramId::Pell,
            ("Pell Grant (Education)", "Beca Pell (Educación)"),
            ProgramCategory::Education,
            (
                "Federal grant for college students with financial need. Unlike loans, grants don't need to be repaid. Maximum award is $7,395/year.",
                "Beca federal para estudiantes universitarios con necesidad financiera. A diferencia de los préstamos, las becas no necesitan ser reembolsadas. La subvención máxima es $7,395/año.",
            ),
            "https://studentaid.gov/h/apply-for-aid/fafsa",
            None,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_catalog_lists_each_program_once_in_order() {
        let catalog = ProgramCatalog::standard();
        let ids: Vec<_> = catalog.programs().iter().map(|program| program.id).collect();
        assert_eq!(ids, ProgramId::ALL.to_vec());
        assert!(ProgramCatalog::from_programs(catalog.programs().to_vec()).is_ok());
    }

    #[test]
    fn duplicate_programs_are_rejected() {
        let mut programs = standard_programs();
        programs.push(programs[0].clone());

        let error = ProgramCatalog::from_programs(programs).expect_err("duplicate rejected");
        assert!(matches!(error, CatalogError::DuplicateEntry("snap")));
    }

    #[test]
    fn snap_estimate_scales_with_household_and_caps_at_eight() {
        let catalog = ProgramCatalog::standard();
        let snap = catalog.get(ProgramId::Snap).expect("snap present");

        assert_eq!(
            snap.estimate_benefit(3),
            BenefitEstimate::UpTo {
                amount: 768,
                period: BenefitPeriod::Month
            }
        );
        assert_eq!(snap.estimate_benefit(12), snap.estimate_benefit(8));
        assert_eq!(snap.estimate_benefit(0), snap.estimate_benefit(1));
        assert_eq!(snap.estimate_benefit(8).label(), "Up to $1,756/month");
    }

    #[test]
    fn estimate_labels_render_structured_values() {
        let catalog = ProgramCatalog::standard();
        let lifeline = catalog.get(ProgramId::Lifeline).expect("lifeline present");
        assert_eq!(lifeline.estimate_benefit(2).label(), "$9.25/month discount");

        let liheap = catalog.get(ProgramId::Liheap).expect("liheap present");
        assert_eq!(liheap.estimate_benefit(2).label(), "$200-$1,000/year");

        let wic = catalog.get(ProgramId::Wic).expect("wic present");
        assert_eq!(wic.estimate_benefit(2).label(), "$50-$75/month per person");
    }

    #[test]
    fn category_labels_are_localized() {
        assert_eq!(ProgramCategory::Cash.label(Locale::En), "Cash Assistance");
        assert_eq!(ProgramCategory::Cash.label(Locale::Es), "Asistencia en Efectivo");
    }
}
