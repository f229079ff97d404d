//! Category-driven response planning.

use outbreak_risk_district_models::DistrictProfile;
use outbreak_risk_models::{
    PublicMessaging, ResourcePlan, ResponseLevel, ResponseProtocol, RiskCategory,
    SurveillanceLevel, VectorControl,
};

const LOW_ACTIONS: &[&str] = &[
    "Continue standard surveillance protocols",
    "Weekly reporting to district health office",
    "Community awareness programs",
    "Vector control maintenance",
];

const MEDIUM_ACTIONS: &[&str] = &[
    "Activate enhanced surveillance",
    "Deploy additional field teams",
    "Daily situation reports",
    "Intensify vector control operations",
    "Issue health advisory to schools",
    "Coordinate with neighboring districts",
];

const HIGH_ACTIONS: &[&str] = &[
    "Activate Emergency Operations Center",
    "Deploy all available field teams",
    "Implement emergency vector control",
    "Issue public health advisory",
    "Coordinate with state health department",
    "Activate hospital surge capacity",
    "Implement travel screening protocols",
    "Daily media briefings",
];

/// Response protocol for `category`.
#[must_use]
pub fn response_protocol(category: RiskCategory) -> ResponseProtocol {
    let (level, actions, timeline, escalation) = match category {
        RiskCategory::Low => (
            ResponseLevel::Routine,
            LOW_ACTIONS,
            "Ongoing monitoring",
            "District Health Officer",
        ),
        RiskCategory::Medium => (
            ResponseLevel::Enhanced,
            MEDIUM_ACTIONS,
            "48-hour activation",
            "District Epidemiology Officer",
        ),
        RiskCategory::High => (
            ResponseLevel::Emergency,
            HIGH_ACTIONS,
            "24-hour immediate response",
            "Chief District Medical Officer",
        ),
    };

    ResponseProtocol {
        level,
        actions: actions.iter().map(ToString::to_string).collect(),
        timeline: timeline.to_string(),
        escalation: escalation.to_string(),
    }
}

/// Resources to commit for `category` in the district described by
/// `profile`.
#[must_use]
pub const fn resource_plan(category: RiskCategory, profile: &DistrictProfile) -> ResourcePlan {
    let (field_teams, surveillance_level, vector_control, public_messaging) = match category {
        RiskCategory::Low => (
            2,
            SurveillanceLevel::Routine,
            VectorControl::Standard,
            PublicMessaging::Awareness,
        ),
        RiskCategory::Medium => (
            3,
            SurveillanceLevel::Enhanced,
            VectorControl::Active,
            PublicMessaging::Advisory,
        ),
        RiskCategory::High => (
            5,
            SurveillanceLevel::Intensive,
            VectorControl::Emergency,
            PublicMessaging::Urgent,
        ),
    };

    ResourcePlan {
        field_teams,
        surveillance_level,
        vector_control,
        public_messaging,
        hospital_beds: profile.beds,
        hospitals: profile.hospitals,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_counts_grow_with_category() {
        assert_eq!(response_protocol(RiskCategory::Low).actions.len(), 4);
        assert_eq!(response_protocol(RiskCategory::Medium).actions.len(), 6);
        assert_eq!(response_protocol(RiskCategory::High).actions.len(), 8);
    }

    #[test]
    fn high_protocol_is_emergency() {
        let protocol = response_protocol(RiskCategory::High);
        assert_eq!(protocol.level, ResponseLevel::Emergency);
        assert_eq!(protocol.actions[0], "Activate Emergency Operations Center");
        assert_eq!(protocol.timeline, "24-hour immediate response");
        assert_eq!(protocol.escalation, "Chief District Medical Officer");
    }

    #[test]
    fn low_protocol_is_routine() {
        let protocol = response_protocol(RiskCategory::Low);
        assert_eq!(protocol.level, ResponseLevel::Routine);
        assert_eq!(protocol.timeline, "Ongoing monitoring");
        assert_eq!(protocol.escalation, "District Health Officer");
    }

    #[test]
    fn resources_copy_hospital_capacity_from_profile() {
        let profile = outbreak_risk_district::resolve("Mumbai");
        let plan = resource_plan(RiskCategory::Medium, profile);

        assert_eq!(plan.field_teams, 3);
        assert_eq!(plan.surveillance_level, SurveillanceLevel::Enhanced);
        assert_eq!(plan.vector_control, VectorControl::Active);
        assert_eq!(plan.public_messaging, PublicMessaging::Advisory);
        assert_eq!(plan.hospitals, profile.hospitals);
        assert_eq!(plan.hospital_beds, profile.beds);
    }

    #[test]
    fn field_teams_by_category() {
        let profile = outbreak_risk_district::default_profile();
        let teams: Vec<u8> = RiskCategory::all()
            .iter()
            .map(|c| resource_plan(*c, profile).field_teams)
            .collect();
        assert_eq!(teams, vec![2, 3, 5]);
    }
}
