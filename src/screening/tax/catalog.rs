use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

use super::super::catalog::{CatalogError, LocalizedText};

/// Tax credits the screener knows how to evaluate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreditId {
    Eitc,
    Ctc,
    Savers,
    Aoc,
}

impl CreditId {
    pub const ALL: [CreditId; 4] = [CreditId::Eitc, CreditId::Ctc, CreditId::Savers, CreditId::Aoc];

    pub const fn key(self) -> &'static str {
        match self {
            CreditId::Eitc => "eitc",
            CreditId::Ctc => "ctc",
            CreditId::Savers => "savers",
            CreditId::Aoc => "aoc",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EarnedIncomeTier {
    pub max_credit: u32,
    pub income_limit_single: u32,
    pub income_limit_married: u32,
}

/// Tiers indexed by qualifying children: zero, one, two, three or more.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EarnedIncomeParameters {
    pub tiers: Vec<EarnedIncomeTier>,
}

impl EarnedIncomeParameters {
    pub const TIER_COUNT: usize = 4;

    pub fn tier(&self, qualifying_children: u32) -> &EarnedIncomeTier {
        let index = (qualifying_children as usize).min(Self::TIER_COUNT - 1);
        &self.tiers[index]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChildTaxParameters {
    pub per_child: u32,
    pub phase_out_single: u32,
    pub phase_out_married: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaversTier {
    pub income_limit: u32,
    pub rate_percent: u32,
}

/// Rate tiers per filing-status bucket, ordered by ascending income limit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaversParameters {
    pub single: Vec<SaversTier>,
    pub married: Vec<SaversTier>,
    pub head_of_household: Vec<SaversTier>,
    #[serde(default = "default_max_contribution_single")]
    pub max_contribution_single: u32,
    #[serde(default = "default_max_contribution_married")]
    pub max_contribution_married: u32,
}

fn default_max_contribution_single() -> u32 {
    2000
}

fn default_max_contribution_married() -> u32 {
    4000
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationParameters {
    pub max_credit: u32,
    pub income_limit_single: u32,
    pub income_limit_married: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CreditParameters {
    EarnedIncome(EarnedIncomeParameters),
    ChildTax(ChildTaxParameters),
    Savers(SaversParameters),
    Education(EducationParameters),
}

impl CreditParameters {
    const fn kind(&self) -> &'static str {
        match self {
            CreditParameters::EarnedIncome(_) => "earned_income",
            CreditParameters::ChildTax(_) => "child_tax",
            CreditParameters::Savers(_) => "savers",
            CreditParameters::Education(_) => "education",
        }
    }

    const fn belongs_to(&self, id: CreditId) -> bool {
        matches!(
            (self, id),
            (CreditParameters::EarnedIncome(_), CreditId::Eitc)
                | (CreditParameters::ChildTax(_), CreditId::Ctc)
                | (CreditParameters::Savers(_), CreditId::Savers)
                | (CreditParameters::Education(_), CreditId::Aoc)
        )
    }
}

/// Catalog record describing a tax credit and its policy parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxCredit {
    pub id: CreditId,
    pub name: LocalizedText,
    pub description: LocalizedText,
    pub requirements: LocalizedText,
    pub parameters: CreditParameters,
}

/// Validated credit catalog: every known credit exactly once, parameters matching ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaxCreditCatalog {
    credits: Vec<TaxCredit>,
}

#[derive(Deserialize)]
struct CatalogFile {
    credits: Vec<TaxCredit>,
}

impl TaxCreditCatalog {
    pub fn from_credits(credits: Vec<TaxCredit>) -> Result<Self, CatalogError> {
        for (index, credit) in credits.iter().enumerate() {
            if credits[..index].iter().any(|other| other.id == credit.id) {
                return Err(CatalogError::DuplicateEntry(credit.id.key()));
            }
            if !credit.parameters.belongs_to(credit.id) {
                return Err(CatalogError::ParameterMismatch {
                    id: credit.id.key(),
                    found: credit.parameters.kind(),
                });
            }
            validate_parameters(credit.id, &credit.parameters)?;
        }

        for id in CreditId::ALL {
            if !credits.iter().any(|credit| credit.id == id) {
                return Err(CatalogError::MissingEntry(id.key()));
            }
        }

        Ok(Self { credits })
    }

    /// Loads a replacement catalog from a JSON file of the form `{"credits": [...]}`.
    pub fn from_json_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let file: CatalogFile =
            serde_json::from_str(&raw).map_err(|source| CatalogError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        Self::from_credits(file.credits)
    }

    /// Shared instance of the built-in 2025 catalog.
    pub fn standard() -> &'static TaxCreditCatalog {
        static STANDARD: OnceLock<TaxCreditCatalog> = OnceLock::new();
        STANDARD.get_or_init(|| TaxCreditCatalog {
            credits: standard_credits(),
        })
    }

    pub fn credits(&self) -> &[TaxCredit] {
        &self.credits
    }

    pub fn get(&self, id: CreditId) -> Option<&TaxCredit> {
        self.credits.iter().find(|credit| credit.id == id)
    }
}

fn validate_parameters(id: CreditId, parameters: &CreditParameters) -> Result<(), CatalogError> {
    let invalid = |detail: &str| CatalogError::InvalidParameters {
        id: id.key(),
        detail: detail.to_string(),
    };

    match parameters {
        CreditParameters::EarnedIncome(params) => {
            if params.tiers.len() != EarnedIncomeParameters::TIER_COUNT {
                return Err(invalid("expected tiers for 0, 1, 2 and 3+ children"));
            }
            if params
                .tiers
                .iter()
                .any(|tier| tier.income_limit_single == 0 || tier.income_limit_married == 0)
            {
                return Err(invalid("income limits must be positive"));
            }
        }
        CreditParameters::Savers(params) => {
            for tiers in [&params.single, &params.married, &params.head_of_household] {
                if tiers
                    .windows(2)
                    .any(|pair| pair[0].income_limit > pair[1].income_limit)
                {
                    return Err(invalid("rate tiers must be ordered by income limit"));
                }
            }
        }
        CreditParameters::ChildTax(_) | CreditParameters::Education(_) => {}
    }

    Ok(())
}

fn text(en: &str, es: &str) -> LocalizedText {
    LocalizedText::new(en, es)
}

fn savers_tiers(limits: [u32; 3]) -> Vec<SaversTier> {
    limits
        .into_iter()
        .zip([50, 20, 10])
        .map(|(income_limit, rate_percent)| SaversTier {
            income_limit,
            rate_percent,
        })
        .collect()
}

fn standard_credits() -> Vec<TaxCredit> {
    vec![
        TaxCredit {
            id: CreditId::Eitc,
            name: text(
                "Earned Income Tax Credit (EITC)",
                "Crédito Tributario por Ingreso del Trabajo (EITC)",
            ),
            description: text(
                "A refundable credit for low- to moderate-income workers. You can get it even if you owe no tax.",
                "Un crédito reembolsable para trabajadores de ingresos bajos a moderados. Puede recibirlo aunque no deba impuestos.",
            ),
            requirements: text(
                "Must have earned income from a job or self-employment and file a tax return.",
                "Debe tener ingresos de un trabajo o trabajo por cuenta propia y presentar una declaración de impuestos.",
            ),
            parameters: CreditParameters::EarnedIncome(EarnedIncomeParameters {
                tiers: vec![
                    EarnedIncomeTier {
                        max_credit: 649,
                        income_limit_single: 19_104,
                        income_limit_married: 26_214,
                    },
                    EarnedIncomeTier {
                        max_credit: 4_328,
                        income_limit_single: 50_434,
                        income_limit_married: 57_554,
                    },
                    EarnedIncomeTier {
                        max_credit: 7_152,
                        income_limit_single: 57_310,
                        income_limit_married: 64_430,
                    },
                    EarnedIncomeTier {
                        max_credit: 8_046,
                        income_limit_single: 61_555,
                        income_limit_married: 68_675,
                    },
                ],
            }),
        },
        TaxCredit {
            id: CreditId::Ctc,
            name: text("Child Tax Credit (CTC)", "Crédito Tributario por Hijos (CTC)"),
            description: text(
                "A credit for each qualifying child under 17. Part of it may be refundable.",
                "Un crédito por cada hijo calificado menor de 17 años. Una parte puede ser reembolsable.",
            ),
            requirements: text(
                "Child must be under 17 at the end of the year, live with you, and have a Social Security number.",
                "El niño debe ser menor de 17 años al final del año, vivir con usted y tener un número de Seguro Social.",
            ),
            parameters: CreditParameters::ChildTax(ChildTaxParameters {
                per_child: 2_000,
                phase_out_single: 200_000,
                phase_out_married: 400_000,
            }),
        },
        TaxCredit {
            id: CreditId::Savers,
            name: text(
                "Saver's Credit (Retirement Savings)",
                "Crédito del Ahorrador (Ahorros para la Jubilación)",
            ),
            description: text(
                "A credit of 10-50% of what you contribute to a 401(k), IRA, or similar retirement account.",
                "Un crédito del 10-50% de lo que aporta a un 401(k), IRA o cuenta de jubilación similar.",
            ),
            requirements: text(
                "Must be 18 or older, not a full-time student, and not claimed as a dependent.",
                "Debe tener 18 años o más, no ser estudiante de tiempo completo y no ser reclamado como dependiente.",
            ),
            parameters: CreditParameters::Savers(SaversParameters {
                single: savers_tiers([23_750, 25_500, 39_500]),
                married: savers_tiers([47_500, 51_000, 79_000]),
                head_of_household: savers_tiers([35_625, 38_250, 59_250]),
                max_contribution_single: default_max_contribution_single(),
                max_contribution_married: default_max_contribution_married(),
            }),
        },
        TaxCredit {
            id: CreditId::Aoc,
            name: text(
                "American Opportunity Tax Credit",
                "Crédito Tributario de Oportunidad Americana",
            ),
            description: text(
                "Up to $2,500 per year for the first four years of college. Up to $1,000 is refundable.",
                "Hasta $2,500 por año durante los primeros cuatro años de universidad. Hasta $1,000 es reembolsable.",
            ),
            requirements: text(
                "Must be pursuing a degree and enrolled at least half-time for one academic period.",
                "Debe estar cursando un título e inscrito al menos a medio tiempo durante un período académico.",
            ),
            parameters: CreditParameters::Education(EducationParameters {
                max_credit: 2_500,
                income_limit_single: 90_000,
                income_limit_married: 180_000,
            }),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_catalog_passes_validation() {
        let credits = TaxCreditCatalog::standard().credits().to_vec();
        let ids: Vec<_> = credits.iter().map(|credit| credit.id).collect();
        assert_eq!(ids, CreditId::ALL.to_vec());
        assert!(TaxCreditCatalog::from_credits(credits).is_ok());
    }

    #[test]
    fn missing_credit_fails_fast() {
        let credits: Vec<_> = standard_credits()
            .into_iter()
            .filter(|credit| credit.id != CreditId::Savers)
            .collect();

        let error = TaxCreditCatalog::from_credits(credits).expect_err("missing savers");
        assert!(matches!(error, CatalogError::MissingEntry("savers")));
        assert!(error.to_string().contains("savers"));
    }

    #[test]
    fn duplicate_and_mismatched_entries_are_rejected() {
        let mut credits = standard_credits();
        credits.push(credits[1].clone());
        assert!(matches!(
            TaxCreditCatalog::from_credits(credits),
            Err(CatalogError::DuplicateEntry("ctc"))
        ));

        let mut credits = standard_credits();
        credits[3].parameters = credits[1].parameters.clone();
        assert!(matches!(
            TaxCreditCatalog::from_credits(credits),
            Err(CatalogError::ParameterMismatch {
                id: "aoc",
                found: "child_tax"
            })
        ));
    }

    #[test]
    fn earned_income_requires_four_tiers() {
        let mut credits = standard_credits();
        if let CreditParameters::EarnedIncome(params) = &mut credits[0].parameters {
            params.tiers.pop();
        }
        assert!(matches!(
            TaxCreditCatalog::from_credits(credits),
            Err(CatalogError::InvalidParameters { id: "eitc", .. })
        ));
    }

    #[test]
    fn earned_income_tier_caps_at_three_children() {
        let credit = TaxCreditCatalog::standard()
            .get(CreditId::Eitc)
            .expect("eitc present");
        let CreditParameters::EarnedIncome(params) = &credit.parameters else {
            panic!("expected earned income parameters");
        };
        assert_eq!(params.tier(0).max_credit, 649);
        assert_eq!(params.tier(5), params.tier(3));
    }

    #[test]
    fn catalog_round_trips_through_json_file_format() {
        let json = serde_json::json!({ "credits": standard_credits() }).to_string();
        let file: CatalogFile = serde_json::from_str(&json).expect("parses");
        let catalog = TaxCreditCatalog::from_credits(file.credits).expect("valid");
        assert_eq!(&catalog, TaxCreditCatalog::standard());
    }

    #[test]
    fn unreadable_catalog_path_reports_read_error() {
        let error = TaxCreditCatalog::from_json_path("./does-not-exist.json")
            .expect_err("missing file");
        assert!(matches!(error, CatalogError::Read { .. }));
    }
}
