//! Document model for the CRPT document-creation API.

use serde::{Deserialize, Serialize};

use crate::error::{CrptError, Result};

/// A document submitted for creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Participant description
    pub description: Description,
    pub doc_id: String,
    pub doc_status: String,
    pub doc_type: String,
    pub import_request: bool,
    pub owner_inn: String,
    pub producer_inn: String,
    pub production_date: String,
    pub production_type: String,
    /// Products covered by this document
    pub products: Vec<Product>,
    pub reg_date: String,
    pub reg_number: String,
}

/// Participant description block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Description {
    pub participant_inn: String,
}

/// A single product record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub certificate_document: String,
    pub certificate_document_date: String,
    pub certificate_document_number: String,
    pub tnved_code: String,
    pub uit_code: String,
    pub uitu_code: String,
}

impl Document {
    /// Check the structural requirements the endpoint imposes: a non-empty
    /// description and product list, and non-empty scalar fields.
    ///
    /// Field *contents* are not validated here; that is business logic the
    /// caller owns.
    pub fn validate(&self) -> Result<()> {
        if self.description.participant_inn.is_empty() {
            return Err(CrptError::InvalidArgument(
                "description.participantInn must not be empty".to_string(),
            ));
        }
        if self.products.is_empty() {
            return Err(CrptError::InvalidArgument(
                "products must not be empty".to_string(),
            ));
        }

        let required = [
            ("docId", &self.doc_id),
            ("docStatus", &self.doc_status),
            ("docType", &self.doc_type),
            ("ownerInn", &self.owner_inn),
            ("producerInn", &self.producer_inn),
            ("productionDate", &self.production_date),
            ("productionType", &self.production_type),
            ("regDate", &self.reg_date),
            ("regNumber", &self.reg_number),
        ];
        for (name, value) in required {
            if value.is_empty() {
                return Err(CrptError::InvalidArgument(format!(
                    "{} must not be empty",
                    name
                )));
            }
        }

        Ok(())
    }

    /// Encode this document as JSON text.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_document() -> Document {
        Document {
            description: Description {
                participant_inn: "1234567890".to_string(),
            },
            doc_id: "doc-1".to_string(),
            doc_status: "DRAFT".to_string(),
            doc_type: "LP_INTRODUCE_GOODS".to_string(),
            import_request: true,
            owner_inn: "1234567890".to_string(),
            producer_inn: "1234567890".to_string(),
            production_date: "2020-01-23".to_string(),
            production_type: "OWN_PRODUCTION".to_string(),
            products: vec![Product {
                certificate_document: "CONFORMITY_CERTIFICATE".to_string(),
                certificate_document_date: "2020-01-23".to_string(),
                certificate_document_number: "cert-1".to_string(),
                tnved_code: "6401100000".to_string(),
                uit_code: "uit-1".to_string(),
                uitu_code: "uitu-1".to_string(),
            }],
            reg_date: "2020-01-23".to_string(),
            reg_number: "reg-1".to_string(),
        }
    }

    #[test]
    fn test_valid_document_passes_validation() {
        assert!(create_test_document().validate().is_ok());
    }

    #[test]
    fn test_empty_products_fail_validation() {
        let mut document = create_test_document();
        document.products.clear();

        assert!(matches!(
            document.validate(),
            Err(CrptError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_empty_participant_inn_fails_validation() {
        let mut document = create_test_document();
        document.description.participant_inn.clear();

        assert!(matches!(
            document.validate(),
            Err(CrptError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_empty_doc_id_fails_validation() {
        let mut document = create_test_document();
        document.doc_id.clear();

        assert!(matches!(
            document.validate(),
            Err(CrptError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_json_field_names_are_camel_case() {
        let json = create_test_document().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["docId"], "doc-1");
        assert_eq!(value["importRequest"], true);
        assert_eq!(value["description"]["participantInn"], "1234567890");
        assert_eq!(value["products"][0]["certificateDocument"], "CONFORMITY_CERTIFICATE");
        assert_eq!(value["products"][0]["tnvedCode"], "6401100000");
        assert_eq!(value["regNumber"], "reg-1");
    }

    #[test]
    fn test_json_round_trip_preserves_fields() {
        let document = create_test_document();
        let json = document.to_json().unwrap();
        let decoded: Document = serde_json::from_str(&json).unwrap();

        assert_eq!(decoded, document);
    }
}
