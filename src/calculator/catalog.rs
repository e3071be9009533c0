use serde::Serialize;

use crate::models::{Language, PainGroup, PainPoint};

/// Ordered, fixed list of pain points shown as the checklist.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    points: Vec<PainPoint>,
}

impl Catalog {
    pub fn new(points: Vec<PainPoint>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<&PainPoint> {
        self.points.get(idx)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PainPoint> {
        self.points.iter()
    }

    /// Entries of one group, paired with their position in the full catalog.
    pub fn grouped(&self, group: PainGroup) -> Vec<(usize, &PainPoint)> {
        self.points
            .iter()
            .enumerate()
            .filter(|(_, p)| p.group == group)
            .collect()
    }

    /// Entries that carry no weight at all. The catalog still accepts them.
    pub fn weightless(&self) -> Vec<usize> {
        self.points
            .iter()
            .enumerate()
            .filter(|(_, p)| !p.has_weight())
            .map(|(i, _)| i)
            .collect()
    }
}

/// Built-in catalog. Structure and weights are identical in every language,
/// only the labels change.
pub fn pain_points(lang: Language) -> Catalog {
    let l = labels(lang);
    use PainGroup::{Control, Growth, Operations};
    Catalog::new(vec![
        PainPoint::new(Operations, l[0]).per_event(10.0).growth(2.0),
        PainPoint::new(Operations, l[1]).per_participant(3.0).growth(1.5),
        PainPoint::new(Operations, l[2]).per_participant(5.0),
        PainPoint::new(Operations, l[3]).per_participant(2.0),
        PainPoint::new(Control, l[4]).per_event(1.0).risk(2.0),
        PainPoint::new(Control, l[5]).risk(1.5),
        PainPoint::new(Control, l[6]).risk(2.0),
        PainPoint::new(Growth, l[7]).per_month(300.0).growth(5.0),
        PainPoint::new(Growth, l[8]).per_month(150.0).growth(3.0),
        PainPoint::new(Growth, l[9]).growth(5.0),
    ])
}

fn labels(lang: Language) -> [&'static str; 10] {
    match lang {
        Language::ZhTw => [
            "資訊孤島： 新增賽事後，需手動更新 LINE 群組、FB 貼文與會場電視。",
            "手動地獄： 依賴 LINE/社群預約，並手動在表單/Excel登記候補。",
            "同步延遲： 現場報到、入座狀況無法即時反映在系統，名單更新混亂。",
            "回覆疲勞： 會員無法自助查詢預約結果，需人工逐一回覆「預約成功」。",
            "重複勞動： 賽事結算後，獎金預付金需手動重複 key 入系統。",
            "權限漏洞： 員工權限未分層，客服、荷官、管理層等皆用同一帳號登入。",
            "追蹤斷點： 操作記錄無軌跡可循，發生錯帳時無法定位責任源頭。",
            "決策盲點： 只有原始報表，缺乏分析建議。",
            "核銷混亂： 紙本優惠券手動發放與核銷，未能統計活動投資報酬率。",
            "客群流失： 缺乏自動再行銷腳本，無法追蹤流失客並精準推送喚回訊息。",
        ],
        Language::ZhCn => [
            "资讯孤岛： 新增赛事后，需手动更新 LINE 群组、FB 贴文与会场电视。",
            "手动地狱： 依赖 LINE/社群预约，并手动在表单/Excel登记候补。",
            "同步延迟： 现场报到、入座状况无法实时反映在系统，名单更新混乱。",
            "回复疲劳： 会员无法自助查询预约结果，需人工逐一回复「预约成功」。",
            "重复劳动： 赛事结算后，奖金预付金需手动重复 key 入系统。",
            "权限漏洞： 员工权限未分层，客服、荷官、管理层等皆用同一账号登录。",
            "追踪断点： 操作记录无轨迹可循，发生错账时无法定位责任源头。",
            "决策盲点： 只有原始报表，缺乏分析建议。",
            "核销混乱： 纸本优惠券手动发放与核销，未能统计活动投资报酬率。",
            "客群流失： 缺乏自动再营销脚本，无法追踪流失客并精准推送唤回讯息。",
        ],
        Language::En => [
            "Information Silos: Manual updates needed for social media and TV displays after adding tournaments.",
            "Manual Hell: Reliant on messaging apps for bookings and Excel for waitlists.",
            "Sync Latency: Live check-ins don't reflect on the system immediately.",
            "Response Fatigue: Staff must manually confirm every player booking.",
            "Redundancy: Prize settlements require manual re-entry into accounting systems.",
            "Security Gaps: Staff share one account with no layered permissions.",
            "Traceability: No audit logs to track responsibility for errors.",
            "Decision Blindness: Raw reports only; no actionable growth insights.",
            "Coupon Chaos: Paper vouchers are untrackable with no ROI statistics.",
            "Player Churn: No automated scripts to track and reactivate lost players.",
        ],
        Language::Ja => [
            "情報の孤立：大会追加後、SNSや会場モニターを手動で更新する必要がある。",
            "手動の地獄：予約をSNSに頼り、ウェイティングリストをExcelで管理している。",
            "同期の遅延：現場のチェックイン状況がシステムに即座に反映されない。",
            "返信疲労：スタッフがプレイヤーの予約を一件ずつ手動で確認・返信している。",
            "重複作業：大会終了後、賞金の支払いを会計システムに手入力している。",
            "セキュリティの欠如：スタッフ全員が同じアカウントを共有し、権限が分かれていない。",
            "追跡の断絶：操作ログがなく、エラーが発生した際の責任の所在が不明。",
            "意思決定の盲点：生のデータしかなく、成長のための分析アドバイスがない。",
            "クーポンの混乱：紙のクーポンを配布しており、ROIを統計化できていない。",
            "顧客の流出：休眠顧客を追跡し、自動的に呼び戻す仕組みがない。",
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_language_has_same_structure() {
        let reference = pain_points(Language::En);
        for lang in Language::all() {
            let catalog = pain_points(lang);
            assert_eq!(catalog.len(), 10);
            for (a, b) in catalog.iter().zip(reference.iter()) {
                assert_eq!(a.group, b.group);
                assert_eq!(a.minutes_per_event, b.minutes_per_event);
                assert_eq!(a.minutes_per_participant, b.minutes_per_participant);
                assert_eq!(a.minutes_per_month, b.minutes_per_month);
                assert_eq!(a.risk_weight, b.risk_weight);
                assert_eq!(a.growth_weight, b.growth_weight);
            }
        }
    }

    #[test]
    fn test_grouping_keeps_catalog_indices() {
        let catalog = pain_points(Language::En);
        let ops: Vec<usize> = catalog.grouped(PainGroup::Operations).iter().map(|(i, _)| *i).collect();
        let control: Vec<usize> = catalog.grouped(PainGroup::Control).iter().map(|(i, _)| *i).collect();
        let growth: Vec<usize> = catalog.grouped(PainGroup::Growth).iter().map(|(i, _)| *i).collect();
        assert_eq!(ops, vec![0, 1, 2, 3]);
        assert_eq!(control, vec![4, 5, 6]);
        assert_eq!(growth, vec![7, 8, 9]);
    }

    #[test]
    fn test_builtin_entries_all_carry_weight() {
        assert!(pain_points(Language::ZhTw).weightless().is_empty());

        let custom = Catalog::new(vec![PainPoint::new(PainGroup::Growth, "empty")]);
        assert_eq!(custom.weightless(), vec![0]);
    }
}
