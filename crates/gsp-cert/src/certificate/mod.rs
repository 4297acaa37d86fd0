pub mod assets;
pub mod import;
pub mod layout;
mod pdf;
mod renderer;
mod router;

use serde::{Deserialize, Serialize};

pub use assets::{BackgroundAssets, BackgroundLookup};
pub use import::{CertificateImportError, CertificateImporter};
pub use layout::{CertificateField, FieldAnchor, FIELD_ANCHORS};
pub use renderer::{CertificateRenderer, RenderError};
pub use router::certificate_router;

/// The data captured on a GSP Form A certificate.
///
/// Every attribute is an optional string: a field absent from the request
/// body deserializes to the empty string and produces no output on the
/// rendered page. Values may contain embedded line breaks; each line is
/// rendered on its own output line.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CertificateFields {
    pub reference_no: String,
    pub issued_in: String,
    pub consigned_from: String,
    pub consigned_to: String,
    pub transport_route: String,
    pub official_use: String,
    pub item_number: String,
    pub package_marks: String,
    pub package_description: String,
    pub origin_criterion: String,
    pub gross_weight_or_quantity: String,
    pub invoice_number_date: String,
    pub certification: String,
    pub declaration: String,
}

impl CertificateFields {
    /// Value of the given field, empty when the caller supplied nothing.
    pub fn value(&self, field: CertificateField) -> &str {
        match field {
            CertificateField::ReferenceNo => &self.reference_no,
            CertificateField::IssuedIn => &self.issued_in,
            CertificateField::ConsignedFrom => &self.consigned_from,
            CertificateField::ConsignedTo => &self.consigned_to,
            CertificateField::TransportRoute => &self.transport_route,
            CertificateField::OfficialUse => &self.official_use,
            CertificateField::ItemNumber => &self.item_number,
            CertificateField::PackageMarks => &self.package_marks,
            CertificateField::PackageDescription => &self.package_description,
            CertificateField::OriginCriterion => &self.origin_criterion,
            CertificateField::GrossWeightOrQuantity => &self.gross_weight_or_quantity,
            CertificateField::InvoiceNumberDate => &self.invoice_number_date,
            CertificateField::Certification => &self.certification,
            CertificateField::Declaration => &self.declaration,
        }
    }
}
