use serde::Serialize;
use std::sync::OnceLock;

use super::super::catalog::LocalizedText;

/// Free tax-preparation service, optionally limited by income.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilingResource {
    pub name: LocalizedText,
    pub description: LocalizedText,
    pub url: String,
    pub income_limit: Option<u32>,
}

impl FilingResource {
    pub fn available_for(&self, annual_income: f64) -> bool {
        self.income_limit
            .map(|limit| annual_income <= f64::from(limit))
            .unwrap_or(true)
    }
}

pub fn filing_resources() -> &'static [FilingResource] {
    static RESOURCES: OnceLock<Vec<FilingResource>> = OnceLock::new();
    RESOURCES.get_or_init(|| {
        vec![
            FilingResource {
                name: LocalizedText::new("IRS Free File", "IRS Free File (Declaración Gratuita)"),
                description: LocalizedText::new(
                    "Guided tax software from IRS partners, free if your income is $84,000 or less.",
                    "Software de impuestos guiado de socios del IRS, gratis si sus ingresos son de $84,000 o menos.",
                ),
                url: "https://www.irs.gov/filing/free-file-do-your-federal-taxes-for-free"
                    .to_string(),
                income_limit: Some(84_000),
            },
            FilingResource {
                name: LocalizedText::new(
                    "VITA (Volunteer Income Tax Assistance)",
                    "VITA (Asistencia Voluntaria al Contribuyente)",
                ),
                description: LocalizedText::new(
                    "IRS-certified volunteers prepare your return in person for free.",
                    "Voluntarios certificados por el IRS preparan su declaración en persona gratis.",
                ),
                url: "https://irs.treasury.gov/freetaxprep/".to_string(),
                income_limit: Some(67_000),
            },
            FilingResource {
                name: LocalizedText::new("GetYourRefund", "GetYourRefund"),
                description: LocalizedText::new(
                    "File online with help from an IRS-certified volunteer.",
                    "Presente en línea con la ayuda de un voluntario certificado por el IRS.",
                ),
                url: "https://www.getyourrefund.org/".to_string(),
                income_limit: Some(67_000),
            },
            FilingResource {
                name: LocalizedText::new("MyFreeTaxes", "MyFreeTaxes"),
                description: LocalizedText::new(
                    "Free filing software supported by United Way, with no income limit.",
                    "Software gratuito para declarar con el apoyo de United Way, sin límite de ingresos.",
                ),
                url: "https://www.myfreetaxes.com/".to_string(),
                income_limit: None,
            },
        ]
    })
}

/// Resources the filer qualifies for, in listing order.
pub fn free_filing_resources(annual_income: f64) -> Vec<&'static FilingResource> {
    filing_resources()
        .iter()
        .filter(|resource| resource.available_for(annual_income))
        .collect()
}
