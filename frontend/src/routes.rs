use dioxus::prelude::*;

use common::report_query::ReportQuery;

use crate::components::navbar::Navbar;
use crate::data_definitions::url_param::UrlParam;
use crate::pages::home_page::HomePage;
use crate::pages::placement_report_page::PlacementReportPage;
use crate::pages::price_analysis_page::PriceAnalysisReportPage;
use crate::pages::problem_report_page::ProblemReportPage;
use crate::pages::visit_report_page::VisitReportPage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]


    #[route("/")]
    HomePage {},


    #[route("/visits/:query")]
    VisitReportPage { query: UrlParam<ReportQuery> },


    #[route("/placements/:query")]
    PlacementReportPage { query: UrlParam<ReportQuery> },


    #[route("/price_analyses/:query")]
    PriceAnalysisReportPage { query: UrlParam<ReportQuery> },


    #[route("/problems/:query")]
    ProblemReportPage { query: UrlParam<ReportQuery> },

}

impl Route {
    pub fn visit_report_default() -> Self {
        Self::VisitReportPage {
            query: UrlParam::from(ReportQuery::default()),
        }
    }

    pub fn placement_report_default() -> Self {
        Self::PlacementReportPage {
            query: UrlParam::from(ReportQuery::default()),
        }
    }

    pub fn price_analysis_report_default() -> Self {
        Self::PriceAnalysisReportPage {
            query: UrlParam::from(ReportQuery::default()),
        }
    }

    pub fn problem_report_default() -> Self {
        Self::ProblemReportPage {
            query: UrlParam::from(ReportQuery::default()),
        }
    }
}
