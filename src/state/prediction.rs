//! Prediction Form State
//!
//! The sales-prediction feature record, submission gating, and the
//! outcome shown in the result panel.
//!
//! The five model features form a closed record: [`FeatureField`] enumerates
//! them, [`FeatureForm`] holds the raw input text, and [`PredictionRequest`]
//! is the wire record sent to the prediction endpoint. Rendering iterates
//! [`FeatureField::ALL`], so a missing or extra field cannot occur.

use serde::Serialize;

/// The five model features, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeatureField {
    QuantityOrdered,
    PriceEach,
    Msrp,
    QtrId,
    MonthId,
}

impl FeatureField {
    /// All fields in the order the form renders them.
    pub const ALL: [FeatureField; 5] = [
        FeatureField::QuantityOrdered,
        FeatureField::PriceEach,
        FeatureField::Msrp,
        FeatureField::QtrId,
        FeatureField::MonthId,
    ];

    /// Field name as the prediction service knows it. Doubles as the
    /// on-screen label, matching the service's feature columns.
    pub fn name(self) -> &'static str {
        match self {
            FeatureField::QuantityOrdered => "QUANTITYORDERED",
            FeatureField::PriceEach => "PRICEEACH",
            FeatureField::Msrp => "MSRP",
            FeatureField::QtrId => "QTR_ID",
            FeatureField::MonthId => "MONTH_ID",
        }
    }
}

/// Raw text held by the five controlled inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FeatureForm {
    pub quantity_ordered: String,
    pub price_each: String,
    pub msrp: String,
    pub qtr_id: String,
    pub month_id: String,
}

impl FeatureForm {
    /// Current text of one field.
    pub fn value(&self, field: FeatureField) -> &str {
        match field {
            FeatureField::QuantityOrdered => &self.quantity_ordered,
            FeatureField::PriceEach => &self.price_each,
            FeatureField::Msrp => &self.msrp,
            FeatureField::QtrId => &self.qtr_id,
            FeatureField::MonthId => &self.month_id,
        }
    }

    /// Returns a copy of the form with exactly one field replaced.
    /// All other fields keep their current values.
    pub fn with_field(mut self, field: FeatureField, value: String) -> Self {
        match field {
            FeatureField::QuantityOrdered => self.quantity_ordered = value,
            FeatureField::PriceEach => self.price_each = value,
            FeatureField::Msrp => self.msrp = value,
            FeatureField::QtrId => self.qtr_id = value,
            FeatureField::MonthId => self.month_id = value,
        }
        self
    }

    /// Builds the wire record, or `None` if any field is empty or not
    /// numeric. The native `required`/`type="number"` constraints already
    /// block submission of incomplete forms in the browser; this is the
    /// programmatic gate behind them, and nothing is sent when it fails.
    pub fn to_request(&self) -> Option<PredictionRequest> {
        fn parse(text: &str) -> Option<f64> {
            let text = text.trim();
            if text.is_empty() {
                return None;
            }
            text.parse().ok()
        }

        Some(PredictionRequest {
            quantity_ordered: parse(&self.quantity_ordered)?,
            price_each: parse(&self.price_each)?,
            msrp: parse(&self.msrp)?,
            qtr_id: parse(&self.qtr_id)?,
            month_id: parse(&self.month_id)?,
        })
    }
}

/// Feature record sent to the prediction endpoint. Serializes with the
/// service's exact column names.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PredictionRequest {
    #[serde(rename = "QUANTITYORDERED")]
    pub quantity_ordered: f64,
    #[serde(rename = "PRICEEACH")]
    pub price_each: f64,
    #[serde(rename = "MSRP")]
    pub msrp: f64,
    #[serde(rename = "QTR_ID")]
    pub qtr_id: f64,
    #[serde(rename = "MONTH_ID")]
    pub month_id: f64,
}

/// What the result panel shows.
///
/// Starts at `Idle` (nothing rendered). A resolved call moves to
/// `Success`, any failure moves to `Error`, and later submissions can move
/// between `Success` and `Error` freely. There is no way back to `Idle`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum PredictionOutcome {
    #[default]
    Idle,
    Success(f64),
    Error,
}

/// Fixed message for the error panel. Failure detail goes to the console,
/// never to the user.
pub const PREDICTION_ERROR_TEXT: &str = "Error: Unable to predict sales. Please try again.";

/// Text for the success panel, two decimal places.
pub fn prediction_text(value: f64) -> String {
    format!("Predicted Sales: ${:.2}", value)
}

/// Pulls the predicted value out of a prediction response body.
///
/// A response whose `predictedSales` is missing, null, or not a number is
/// a failure like any other; the caller collapses it into the generic
/// error panel.
pub fn parse_prediction_body(body: &serde_json::Value) -> Result<f64, String> {
    body.get("predictedSales")
        .and_then(|v| v.as_f64())
        .ok_or_else(|| format!("prediction response had no numeric predictedSales: {}", body))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> FeatureForm {
        FeatureForm {
            quantity_ordered: "2".to_string(),
            price_each: "10".to_string(),
            msrp: "25".to_string(),
            qtr_id: "3".to_string(),
            month_id: "9".to_string(),
        }
    }

    #[test]
    fn test_with_field_replaces_only_that_field() {
        let base = filled_form();
        for &field in &FeatureField::ALL {
            let updated = base.clone().with_field(field, "99".to_string());
            for &other in &FeatureField::ALL {
                if other == field {
                    assert_eq!(updated.value(other), "99");
                } else {
                    assert_eq!(updated.value(other), base.value(other));
                }
            }
        }
    }

    #[test]
    fn test_to_request_requires_every_field() {
        assert!(filled_form().to_request().is_some());

        for &field in &FeatureField::ALL {
            let blanked = filled_form().with_field(field, String::new());
            assert!(blanked.to_request().is_none(), "{:?} empty", field);

            let garbled = filled_form().with_field(field, "abc".to_string());
            assert!(garbled.to_request().is_none(), "{:?} non-numeric", field);
        }
    }

    #[test]
    fn test_to_request_trims_whitespace() {
        let form = filled_form().with_field(FeatureField::Msrp, " 25.5 ".to_string());
        let request = form.to_request().unwrap();
        assert_eq!(request.msrp, 25.5);
    }

    #[test]
    fn test_request_serializes_with_service_column_names() {
        let request = filled_form().to_request().unwrap();
        let json = serde_json::to_value(request).unwrap();
        let object = json.as_object().unwrap();

        assert_eq!(object.len(), 5);
        assert_eq!(object["QUANTITYORDERED"], 2.0);
        assert_eq!(object["PRICEEACH"], 10.0);
        assert_eq!(object["MSRP"], 25.0);
        assert_eq!(object["QTR_ID"], 3.0);
        assert_eq!(object["MONTH_ID"], 9.0);
    }

    #[test]
    fn test_prediction_text_rounds_to_two_decimals() {
        assert_eq!(prediction_text(250.5), "Predicted Sales: $250.50");
        assert_eq!(prediction_text(1234.567), "Predicted Sales: $1234.57");
        assert_eq!(prediction_text(0.0), "Predicted Sales: $0.00");
    }

    #[test]
    fn test_parse_prediction_body_number() {
        let body = serde_json::json!({ "predictedSales": 250.5 });
        assert_eq!(parse_prediction_body(&body).unwrap(), 250.5);
    }

    #[test]
    fn test_parse_prediction_body_rejects_non_numbers() {
        for body in [
            serde_json::json!({ "predictedSales": null }),
            serde_json::json!({ "predictedSales": "250.5" }),
            serde_json::json!({ "error": "Model not trained" }),
        ] {
            assert!(parse_prediction_body(&body).is_err(), "{}", body);
        }
    }

    #[test]
    fn test_outcome_starts_idle() {
        assert_eq!(PredictionOutcome::default(), PredictionOutcome::Idle);
    }
}
