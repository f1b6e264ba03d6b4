//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use chrono::{Days, NaiveDate};

use crate::types::{FundingRecord, Summary};

/// Fixed reference date so date-dependent scores are reproducible.
pub fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 15).unwrap_or(NaiveDate::MIN)
}

/// ISO date string `days` after [`reference_date`] (negative goes back).
pub fn date_offset(days: i64) -> String {
    let base = reference_date();
    let date = if days >= 0 {
        base.checked_add_days(Days::new(days as u64))
    } else {
        base.checked_sub_days(Days::new(days.unsigned_abs()))
    };
    date.unwrap_or(base).format("%Y-%m-%d").to_string()
}

/// Create a record with just an id and name. Everything else is empty and
/// the closing date is unparseable, so it contributes no date bonus.
pub fn make_record(id: u64, name: &str) -> FundingRecord {
    FundingRecord {
        id,
        name: name.to_string(),
        institution: String::new(),
        category: String::new(),
        closing_date: String::new(),
        regions: vec![],
        beneficiary_types: vec![],
        summary: None,
    }
}

/// Create a record with the fields that carry most of the score.
pub fn make_record_with(
    id: u64,
    name: &str,
    institution: &str,
    category: &str,
    closing_date: &str,
) -> FundingRecord {
    FundingRecord {
        institution: institution.to_string(),
        category: category.to_string(),
        closing_date: closing_date.to_string(),
        ..make_record(id, name)
    }
}

/// Create a summary from its four parts.
pub fn make_summary(
    co_financing: &str,
    execution_timeframe: &str,
    key_requirements: &[&str],
    remarks: &str,
) -> Summary {
    Summary {
        co_financing: co_financing.to_string(),
        execution_timeframe: execution_timeframe.to_string(),
        key_requirements: key_requirements.iter().map(|s| s.to_string()).collect(),
        remarks: remarks.to_string(),
    }
}

/// A small, realistic dataset covering every field.
pub fn sample_records() -> Vec<FundingRecord> {
    vec![
        FundingRecord {
            regions: vec!["Todas".to_string()],
            beneficiary_types: vec!["Pequeño productor".to_string(), "Organizaciones de regantes".to_string()],
            summary: Some(make_summary(
                "Bonificación de hasta 90% del costo",
                "12 meses",
                &["Derechos de aprovechamiento de agua", "Proyecto de riego tecnificado"],
                "Concurso con varios llamados al año",
            )),
            ..make_record_with(1, "CNR: Concurso Nacional de Riego", "CNR", "Riego", &date_offset(20))
        },
        FundingRecord {
            regions: vec!["Región de Ñuble".to_string(), "Región del Biobío".to_string()],
            beneficiary_types: vec!["Pequeño productor".to_string()],
            summary: Some(make_summary(
                "Incentivo de hasta 90%",
                "Temporada agrícola",
                &["Usuario INDAP", "Plan de manejo"],
                "Recuperación de suelos degradados",
            )),
            ..make_record_with(2, "SIRSD-S: Suelos Degradados", "INDAP", "Suelos", &date_offset(60))
        },
        FundingRecord {
            regions: vec!["Todas".to_string()],
            beneficiary_types: vec!["Empresa".to_string(), "Cooperativa".to_string()],
            summary: Some(make_summary(
                "Cofinanciamiento de 70%",
                "24 meses",
                &["Proyecto de innovación"],
                "Énfasis en sustentabilidad",
            )),
            ..make_record_with(3, "Innovación Agraria FIA", "FIA", "Innovación", &date_offset(-5))
        },
        FundingRecord {
            regions: vec!["Región de Coquimbo".to_string()],
            beneficiary_types: vec!["Pequeño productor".to_string()],
            summary: None,
            ..make_record_with(4, "Emergencia Agrícola por Sequía", "INDAP", "Emergencia", &date_offset(10))
        },
        FundingRecord {
            regions: vec![],
            beneficiary_types: vec!["Empresa".to_string()],
            summary: Some(make_summary(
                "Crédito de largo plazo",
                "",
                &["Iniciación de actividades"],
                "",
            )),
            ..make_record_with(5, "Crédito CORFO para Inversión Productiva", "CORFO", "Financiamiento", "sin fecha")
        },
    ]
}
