//! Encounter Table columns and the selector catalogs built on them.
//!
//! Each panel offers a fixed list of display names that map onto a column.
//! Column names interpolated into SQL always come from [`Field::column`].

use serde::Serialize;

/// Whether a column holds integer counts or category labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FieldKind {
    Numeric,
    Categorical,
}

/// A selectable column of the Encounter Table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Field {
    TimeInHospital,
    LabProcedures,
    Procedures,
    Medications,
    OutpatientVisits,
    InpatientVisits,
    EmergencyVisits,
    MedicalSpecialty,
    PrimaryDiagnosis,
    SecondaryDiagnosis,
    TertiaryDiagnosis,
    GlucoseTest,
    A1cTest,
    MedicationChange,
    DiabetesMedication,
    Readmitted,
}

/// Variables offered by the distribution panel, in dropdown order.
pub const DISTRIBUTION_FIELDS: [Field; 16] = [
    Field::TimeInHospital,
    Field::LabProcedures,
    Field::Procedures,
    Field::Medications,
    Field::OutpatientVisits,
    Field::InpatientVisits,
    Field::EmergencyVisits,
    Field::MedicalSpecialty,
    Field::PrimaryDiagnosis,
    Field::SecondaryDiagnosis,
    Field::TertiaryDiagnosis,
    Field::GlucoseTest,
    Field::A1cTest,
    Field::MedicationChange,
    Field::DiabetesMedication,
    Field::Readmitted,
];

/// Count fields plotted against length of stay.
pub const STAY_FACTOR_FIELDS: [Field; 6] = [
    Field::LabProcedures,
    Field::Procedures,
    Field::Medications,
    Field::OutpatientVisits,
    Field::InpatientVisits,
    Field::EmergencyVisits,
];

/// Interventions averaged per age bracket and readmission status.
pub const INTERVENTION_FIELDS: [Field; 3] = [
    Field::LabProcedures,
    Field::Procedures,
    Field::Medications,
];

impl Field {
    /// Label shown in dropdowns and used as the chart axis title.
    pub fn label(self) -> &'static str {
        match self {
            Field::TimeInHospital => "Time in hospital",
            Field::LabProcedures => "Number of lab procedures",
            Field::Procedures => "Number of procedures",
            Field::Medications => "Number of medications",
            Field::OutpatientVisits => "Number of outpatient visits",
            Field::InpatientVisits => "Number of inpatient visits",
            Field::EmergencyVisits => "Number of emergency visits",
            Field::MedicalSpecialty => "Medical specialty",
            Field::PrimaryDiagnosis => "Primary diagnosis",
            Field::SecondaryDiagnosis => "Secondary diagnosis",
            Field::TertiaryDiagnosis => "Tertiary diagnosis",
            Field::GlucoseTest => "glucose test",
            Field::A1cTest => "A1C test",
            Field::MedicationChange => "Change in medication",
            Field::DiabetesMedication => "Diabetes medication",
            Field::Readmitted => "Readmission status",
        }
    }

    /// Column name in the `encounters` table.
    pub fn column(self) -> &'static str {
        match self {
            Field::TimeInHospital => "time_in_hospital",
            Field::LabProcedures => "n_lab_procedures",
            Field::Procedures => "n_procedures",
            Field::Medications => "n_medications",
            Field::OutpatientVisits => "n_outpatient",
            Field::InpatientVisits => "n_inpatient",
            Field::EmergencyVisits => "n_emergency",
            Field::MedicalSpecialty => "medical_specialty",
            Field::PrimaryDiagnosis => "diag_1",
            Field::SecondaryDiagnosis => "diag_2",
            Field::TertiaryDiagnosis => "diag_3",
            Field::GlucoseTest => "glucose_test",
            Field::A1cTest => "a1c_test",
            Field::MedicationChange => "change",
            Field::DiabetesMedication => "diabetes_med",
            Field::Readmitted => "readmitted",
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            Field::TimeInHospital
            | Field::LabProcedures
            | Field::Procedures
            | Field::Medications
            | Field::OutpatientVisits
            | Field::InpatientVisits
            | Field::EmergencyVisits => FieldKind::Numeric,
            _ => FieldKind::Categorical,
        }
    }

    pub fn is_numeric(self) -> bool {
        self.kind() == FieldKind::Numeric
    }

    /// Look up a field by its column name (the `value` of a dropdown option).
    pub fn from_column(column: &str) -> Option<Field> {
        DISTRIBUTION_FIELDS.iter().copied().find(|f| f.column() == column)
    }
}
