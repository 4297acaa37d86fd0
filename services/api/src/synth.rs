//! Synthetic certificate data for the batch driver.
//!
//! Values are derived from the certificate index alone, so a batch re-run
//! posts the same payloads and diffs between runs stay meaningful.

use gsp_cert::certificate::CertificateFields;

const COMPANIES: &[&str] = &[
    "Acme Trading Co",
    "Orbit Textiles GmbH",
    "Meridian Exports Ltd",
    "Cascade Agro Supplies",
    "Blue Harbor Industries",
    "Kestrel Metalworks",
    "Lotus Botanicals",
    "Northwind Ceramics",
];

const CITIES: &[&str] = &[
    "Berlin",
    "Rotterdam",
    "Colombo",
    "Hamburg",
    "Mombasa",
    "Dhaka",
    "Antwerp",
    "Ho Chi Minh City",
];

const STREETS: &[&str] = &[
    "Harbor Road",
    "Main Street",
    "Industrial Park Lane",
    "Customs Quay",
    "Warehouse Row",
    "Docklands Avenue",
];

const GOODS: &[&str] = &[
    "Cotton garments, assorted sizes",
    "Ceramic tableware, export grade",
    "Machined aluminium fittings",
    "Packaged black tea, loose leaf",
    "Leather goods and accessories",
    "Frozen seafood, processed",
];

const TRANSPORT_MODES: &[&str] = &["Sea freight", "Air freight", "Rail freight", "Road haulage"];

const ORIGIN_CRITERIA: &[&str] = &["P", "W", "F", "A"];

const OFFICIAL_NOTES: &[&str] = &[
    "Inspected at port of loading.",
    "Documents verified against invoice.",
    "Sample drawn for laboratory check.",
    "Cleared without physical inspection.",
];

const CERTIFICATIONS: &[&str] = &[
    "It is hereby certified, on the basis of control carried out, that the declaration by the exporter is correct.",
    "Certified that the goods described above meet the origin requirements specified for those goods.",
];

const DECLARATIONS: &[&str] = &[
    "The undersigned hereby declares that the above details and statements are correct.",
    "I declare that all the goods were produced in the country shown and comply with the origin requirements.",
];

fn pick<'a>(pool: &'a [&'a str], seed: usize) -> &'a str {
    pool[seed % pool.len()]
}

/// Build the fields for the `index`-th synthetic certificate (1-based).
pub(crate) fn synthetic_certificate(index: usize) -> CertificateFields {
    let seed = index.wrapping_mul(2654435761);

    CertificateFields {
        reference_no: format!("GSP-{:06}", 100_000 + seed % 900_000),
        issued_in: pick(CITIES, seed).to_string(),
        consigned_from: format!(
            "{}\n{} {}",
            pick(COMPANIES, seed),
            10 + seed % 180,
            pick(STREETS, seed >> 3),
        ),
        consigned_to: format!(
            "{}\n{} {}",
            pick(COMPANIES, seed >> 4),
            10 + (seed >> 2) % 180,
            pick(STREETS, seed >> 7),
        ),
        transport_route: format!(
            "{} via {}",
            pick(TRANSPORT_MODES, seed),
            pick(CITIES, seed >> 5),
        ),
        official_use: pick(OFFICIAL_NOTES, seed).to_string(),
        item_number: (1 + index % 10).to_string(),
        package_marks: format!("PKG-{:05}", seed % 100_000),
        package_description: pick(GOODS, seed).to_string(),
        origin_criterion: pick(ORIGIN_CRITERIA, seed).to_string(),
        gross_weight_or_quantity: format!("{} kg", 100 + seed % 900),
        invoice_number_date: format!(
            "INV-{:04}/2026-{:02}-{:02}",
            1000 + seed % 9000,
            1 + seed % 12,
            1 + seed % 28,
        ),
        certification: pick(CERTIFICATIONS, seed).to_string(),
        declaration: pick(DECLARATIONS, seed >> 1).to_string(),
    }
}
