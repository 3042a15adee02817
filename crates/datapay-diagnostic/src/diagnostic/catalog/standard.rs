use super::super::domain::{Dimension, QuestionId};
use super::{AnswerOption, Question};

pub(super) const VERSION: &str = "datapay-standard-2024.1";

struct QuestionRow {
    id: u16,
    dimension: Dimension,
    text: &'static str,
    options: &'static [(u8, &'static str)],
}

// Governance and odd ids use the five-step scale, other even ids the four-step one.
const QUESTIONS: &[QuestionRow] = &[
    QuestionRow {
        id: 1,
        dimension: Dimension::GovernanceQuality,
        text: "How is ownership of customer and sales data defined?",
        options: &[
            (0, "Nobody is responsible for it"),
            (25, "Informally, by whoever uses the data"),
            (50, "Per department, without written rules"),
            (75, "Named data owners with documented policies"),
            (100, "A governance committee with data stewards in every area"),
        ],
    },
    QuestionRow {
        id: 2,
        dimension: Dimension::GovernanceQuality,
        text: "How are duplicated or inconsistent records detected and fixed?",
        options: &[
            (0, "They are not"),
            (25, "Only when a problem surfaces"),
            (50, "Periodic manual reviews"),
            (75, "Validation rules in the main entry systems"),
            (100, "Automated quality checks on every load"),
        ],
    },
    QuestionRow {
        id: 3,
        dimension: Dimension::GovernanceQuality,
        text: "Is there a shared definition of business metrics such as \"active customer\"?",
        options: &[
            (0, "Each team uses its own definition"),
            (25, "Definitions exist but are not written down"),
            (50, "Some metrics are documented"),
            (75, "A metrics dictionary covers the main indicators"),
            (100, "A maintained dictionary is enforced in every report"),
        ],
    },
    QuestionRow {
        id: 4,
        dimension: Dimension::GovernanceQuality,
        text: "How is access to sensitive customer data controlled?",
        options: &[
            (0, "Everyone can see everything"),
            (25, "Shared passwords or folders"),
            (50, "Role-based access in some systems"),
            (75, "Role-based access in the main systems"),
            (100, "Role-based access with audit trails and privacy reviews"),
        ],
    },
    QuestionRow {
        id: 5,
        dimension: Dimension::SourceIntegration,
        text: "How are your customer data sources connected?",
        options: &[
            (0, "Not connected, each team keeps its own files"),
            (25, "Manual exports between systems"),
            (50, "A few point-to-point integrations"),
            (75, "Most sources feed a central repository"),
            (100, "A single integrated customer view across all systems"),
        ],
    },
    QuestionRow {
        id: 6,
        dimension: Dimension::SourceIntegration,
        text: "How current is the data used for reporting?",
        options: &[
            (0, "Weeks old or unknown"),
            (33, "Refreshed monthly"),
            (66, "Refreshed daily"),
            (100, "Near real time"),
        ],
    },
    QuestionRow {
        id: 7,
        dimension: Dimension::SourceIntegration,
        text: "Can you link a customer's purchases across every sales channel?",
        options: &[
            (0, "No"),
            (25, "Only by hand for specific cases"),
            (50, "For the main channel only"),
            (75, "For most channels"),
            (100, "Yes, automatically for every channel"),
        ],
    },
    QuestionRow {
        id: 8,
        dimension: Dimension::SourceIntegration,
        text: "How much effort goes into preparing data before each analysis?",
        options: &[
            (0, "Most of the analyst's time"),
            (33, "About half of the time"),
            (66, "Some steps are automated"),
            (100, "Almost none, pipelines deliver ready data"),
        ],
    },
    QuestionRow {
        id: 9,
        dimension: Dimension::AnalyticalCapability,
        text: "Which tools does the company use to analyze data?",
        options: &[
            (0, "None"),
            (25, "Spreadsheets"),
            (50, "Static BI reports"),
            (75, "Self-service dashboards"),
            (100, "Dashboards plus statistical and predictive analysis"),
        ],
    },
    QuestionRow {
        id: 10,
        dimension: Dimension::AnalyticalCapability,
        text: "Do you segment customers by behavior or value?",
        options: &[
            (0, "No segmentation"),
            (33, "Basic demographic groups"),
            (66, "Behavioral segments reviewed occasionally"),
            (100, "Value-based segments updated continuously"),
        ],
    },
    QuestionRow {
        id: 11,
        dimension: Dimension::AnalyticalCapability,
        text: "Who can answer a data question without help from IT?",
        options: &[
            (0, "Nobody"),
            (25, "One or two specialists"),
            (50, "The analytics team"),
            (75, "Managers in most areas"),
            (100, "Any employee with access to the dashboards"),
        ],
    },
    QuestionRow {
        id: 12,
        dimension: Dimension::AnalyticalCapability,
        text: "Does the company have dedicated analytics skills?",
        options: &[
            (0, "No"),
            (33, "An enthusiast in some team"),
            (66, "A small dedicated team"),
            (100, "An analytics area with a training program"),
        ],
    },
    QuestionRow {
        id: 13,
        dimension: Dimension::DataDrivenDecisions,
        text: "How is the marketing budget allocated across channels?",
        options: &[
            (0, "By intuition"),
            (25, "Repeating last year's split"),
            (50, "Using channel reports"),
            (75, "By measured return per channel"),
            (100, "Reallocated continuously from performance data"),
        ],
    },
    QuestionRow {
        id: 14,
        dimension: Dimension::DataDrivenDecisions,
        text: "Are strategic decisions backed by indicators reviewed in meetings?",
        options: &[
            (0, "Rarely"),
            (33, "Sometimes"),
            (66, "Usually"),
            (100, "Always, with a standing indicator review"),
        ],
    },
    QuestionRow {
        id: 15,
        dimension: Dimension::DataDrivenDecisions,
        text: "How are campaigns and initiatives tested before scaling?",
        options: &[
            (0, "They are launched at full scale"),
            (25, "Informal before/after comparison"),
            (50, "Pilot in one region or segment"),
            (75, "Controlled tests with success criteria"),
            (100, "Systematic experimentation with control groups"),
        ],
    },
    QuestionRow {
        id: 16,
        dimension: Dimension::DataDrivenDecisions,
        text: "How quickly do you react when a key indicator drops?",
        options: &[
            (0, "We notice at month or quarter close"),
            (33, "Within a few weeks"),
            (66, "Within days"),
            (100, "Automatic alerts trigger same-day action"),
        ],
    },
    QuestionRow {
        id: 17,
        dimension: Dimension::DataRoi,
        text: "Do you measure the financial return of data initiatives?",
        options: &[
            (0, "No"),
            (25, "Anecdotally"),
            (50, "For some large projects"),
            (75, "For most initiatives"),
            (100, "Every initiative has a tracked business case"),
        ],
    },
    QuestionRow {
        id: 18,
        dimension: Dimension::DataRoi,
        text: "How well do you know customer acquisition cost and lifetime value?",
        options: &[
            (0, "We do not calculate them"),
            (33, "Rough company-wide estimates"),
            (66, "Calculated per channel"),
            (100, "Calculated per segment and used in planning"),
        ],
    },
    QuestionRow {
        id: 19,
        dimension: Dimension::DataRoi,
        text: "Do you track and act on customer churn?",
        options: &[
            (0, "Churn is not tracked"),
            (25, "We know the overall churn rate"),
            (50, "Churn is tracked by segment"),
            (75, "At-risk customers are flagged"),
            (100, "Retention actions are triggered and measured automatically"),
        ],
    },
    QuestionRow {
        id: 20,
        dimension: Dimension::DataRoi,
        text: "How is investment in data prioritized?",
        options: &[
            (0, "There is no data budget"),
            (33, "Ad hoc, when a problem appears"),
            (66, "Yearly budget for data projects"),
            (100, "Roadmap prioritized by expected return"),
        ],
    },
];

pub(super) fn questions() -> Vec<Question> {
    QUESTIONS
        .iter()
        .map(|row| Question {
            id: QuestionId(row.id),
            dimension: row.dimension,
            text: row.text.to_string(),
            options: row
                .options
                .iter()
                .map(|(points, label)| AnswerOption {
                    points: *points,
                    label: label.to_string(),
                })
                .collect(),
        })
        .collect()
}
