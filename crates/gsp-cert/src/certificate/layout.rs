//! The field-to-position contract for the Form A template.
//!
//! The anchor table is fixed at build time and must stay stable across
//! versions: the coordinates line the text up with the boxes of the
//! pre-printed certificate form, so any change here is a visual regression.

/// A box on the certificate form that receives caller-supplied text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CertificateField {
    ReferenceNo,
    IssuedIn,
    ConsignedFrom,
    ConsignedTo,
    TransportRoute,
    OfficialUse,
    ItemNumber,
    PackageMarks,
    PackageDescription,
    OriginCriterion,
    GrossWeightOrQuantity,
    InvoiceNumberDate,
    Certification,
    Declaration,
}

impl CertificateField {
    /// Wire/CSV identifier of the field.
    pub fn key(&self) -> &'static str {
        match self {
            CertificateField::ReferenceNo => "reference_no",
            CertificateField::IssuedIn => "issued_in",
            CertificateField::ConsignedFrom => "consigned_from",
            CertificateField::ConsignedTo => "consigned_to",
            CertificateField::TransportRoute => "transport_route",
            CertificateField::OfficialUse => "official_use",
            CertificateField::ItemNumber => "item_number",
            CertificateField::PackageMarks => "package_marks",
            CertificateField::PackageDescription => "package_description",
            CertificateField::OriginCriterion => "origin_criterion",
            CertificateField::GrossWeightOrQuantity => "gross_weight_or_quantity",
            CertificateField::InvoiceNumberDate => "invoice_number_date",
            CertificateField::Certification => "certification",
            CertificateField::Declaration => "declaration",
        }
    }
}

/// Page position where a field's first line begins, in PDF points measured
/// from the bottom-left corner, plus the font size used for the field.
/// Subsequent lines of a multi-line value stack downward by `size` each.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldAnchor {
    pub x: f32,
    pub y: f32,
    pub size: f32,
}

pub const DEFAULT_FONT_SIZE: f32 = 12.0;

const fn anchor(x: f32, y: f32) -> FieldAnchor {
    FieldAnchor {
        x,
        y,
        size: DEFAULT_FONT_SIZE,
    }
}

/// Anchor assignments for every field on page 1 of the Form A template.
pub const FIELD_ANCHORS: [(CertificateField, FieldAnchor); 14] = [
    (CertificateField::ReferenceNo, anchor(320.0, 775.0)),
    (CertificateField::IssuedIn, anchor(380.0, 700.0)),
    (CertificateField::ConsignedFrom, anchor(60.0, 775.0)),
    (CertificateField::ConsignedTo, anchor(60.0, 710.0)),
    (CertificateField::TransportRoute, anchor(60.0, 630.0)),
    (CertificateField::OfficialUse, anchor(310.0, 630.0)),
    (CertificateField::ItemNumber, anchor(50.0, 450.0)),
    (CertificateField::PackageMarks, anchor(89.0, 450.0)),
    (CertificateField::PackageDescription, anchor(160.0, 450.0)),
    (CertificateField::OriginCriterion, anchor(375.0, 450.0)),
    (CertificateField::GrossWeightOrQuantity, anchor(440.0, 450.0)),
    (CertificateField::InvoiceNumberDate, anchor(500.0, 450.0)),
    (CertificateField::Certification, anchor(60.0, 110.0)),
    (CertificateField::Declaration, anchor(320.0, 110.0)),
];

/// Anchor for a single field.
pub fn anchor_for(field: CertificateField) -> FieldAnchor {
    FIELD_ANCHORS
        .iter()
        .find(|(candidate, _)| *candidate == field)
        .map(|(_, anchor)| *anchor)
        .expect("every certificate field has an anchor")
}
