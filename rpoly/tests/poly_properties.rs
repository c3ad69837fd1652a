use proptest::prelude::*;

use rpoly::{Polynomial, TOLERANCE};

fn arb_coeff() -> impl Strategy<Value = f64> {
    (-100.0f64..100.0).prop_filter("coefficient must not be negligible", |c| c.abs() >= 1e-3)
}

fn arb_pairs() -> impl Strategy<Value = Vec<(i64, f64)>> {
    proptest::collection::vec((0i64..12, arb_coeff()), 0..16)
}

fn arb_poly() -> impl Strategy<Value = Polynomial> {
    arb_pairs().prop_map(|pairs| Polynomial::from_terms(pairs).unwrap())
}

fn abs_eval(p: &Polynomial, x: f64) -> f64 {
    p.terms().map(|t| t.coeff().abs() * x.abs().powi(t.exp() as i32)).sum()
}

fn is_canonical(p: &Polynomial) -> bool {
    let terms: Vec<_> = p.terms().collect();
    terms.windows(2).all(|w| w[0].exp() < w[1].exp())
        && terms.iter().all(|t| t.coeff().abs() >= TOLERANCE)
}

// ===== Insertion =====

proptest! {
    #[test]
    fn insert_keeps_sorted(pairs in arb_pairs()) {
        let p = Polynomial::from_terms(pairs).unwrap();
        prop_assert!(is_canonical(&p));
    }
}

proptest! {
    #[test]
    fn insert_merges_same_exp(p in arb_poly(), e in 0i64..12, c in arb_coeff()) {
        let mut q = p.clone();
        q.insert_term(e, c).unwrap();

        let n = q.terms().filter(|t| t.exp() == e as usize).count();
        prop_assert!(n <= 1);
        prop_assert!(q.nterms() <= p.nterms() + 1);
    }
}

proptest! {
    #[test]
    fn insert_cancel_removes(p in arb_poly(), e in 0i64..12, c in arb_coeff()) {
        let mut q = p.clone();
        q.insert_term(e, c).unwrap();

        let r = q.coeff(e as usize);
        if r != 0.0 {
            q.insert_term(e, -r).unwrap();
        }

        prop_assert_eq!(q.coeff(e as usize), 0.0);
        prop_assert!(q.terms().all(|t| t.exp() != e as usize));
        prop_assert!(is_canonical(&q));
    }
}

proptest! {
    #[test]
    fn insert_rejects_negative_exp(p in arb_poly(), e in -100i64..0, c in arb_coeff()) {
        let mut q = p.clone();
        prop_assert!(q.insert_term(e, c).is_err());
        prop_assert_eq!(q, p);
    }
}

// ===== Arithmetic =====

proptest! {
    #[test]
    fn add_does_not_mutate(p in arb_poly(), q in arb_poly()) {
        let (p0, q0) = (p.clone(), q.clone());
        let r = p.add(&q).unwrap();

        prop_assert_eq!(&p, &p0);
        prop_assert_eq!(&q, &q0);
        prop_assert!(is_canonical(&r));
    }
}

proptest! {
    #[test]
    fn add_commutative(p in arb_poly(), q in arb_poly()) {
        prop_assert_eq!(p.add(&q).unwrap(), q.add(&p).unwrap());
    }
}

proptest! {
    #[test]
    fn multiply_does_not_mutate(p in arb_poly(), r in -10.0f64..10.0) {
        let p0 = p.clone();
        let q = p.multiply(r);

        prop_assert_eq!(&p, &p0);
        prop_assert_eq!(q.nterms(), p.nterms());
    }
}

proptest! {
    #[test]
    fn evaluate_additive(p in arb_poly(), q in arb_poly(), x in -2.0f64..2.0) {
        let lhs = p.add(&q).unwrap().evaluate(x);
        let rhs = p.evaluate(x) + q.evaluate(x);
        let scale = 1.0 + abs_eval(&p, x) + abs_eval(&q, x);

        // merged terms below tolerance are dropped, at most 1e-8 * 2^11 each.
        prop_assert!((lhs - rhs).abs() <= 1e-9 * scale + 1e-4, "{} != {}", lhs, rhs);
    }
}

proptest! {
    #[test]
    fn evaluate_scaled(p in arb_poly(), r in -10.0f64..10.0, x in -2.0f64..2.0) {
        let lhs = p.multiply(r).evaluate(x);
        let rhs = r * p.evaluate(x);
        let scale = 1.0 + r.abs() * abs_eval(&p, x);

        prop_assert!((lhs - rhs).abs() <= 1e-9 * scale, "{} != {}", lhs, rhs);
    }
}

// ===== Differentiation =====

proptest! {
    #[test]
    fn power_rule(n in 0i64..12, c in arb_coeff()) {
        let p = Polynomial::from_terms([(n, c)]).unwrap();
        let d = p.differentiate();

        if n == 0 {
            prop_assert!(d.is_zero());
        } else {
            let t = d.lead_term().unwrap();
            prop_assert_eq!(d.nterms(), 1);
            prop_assert_eq!(t.exp(), (n - 1) as usize);
            prop_assert_eq!(t.coeff(), c * n as f64);
        }
    }
}

proptest! {
    #[test]
    fn differentiate_linear(p in arb_poly(), q in arb_poly()) {
        let d = p.add(&q).unwrap().differentiate();
        let e = p.differentiate().add(&q.differentiate()).unwrap();

        prop_assert!(is_canonical(&d));
        for k in 0..12 {
            let (a, b) = (d.coeff(k), e.coeff(k));
            prop_assert!((a - b).abs() <= 1e-6, "x^{}: {} != {}", k, a, b);
        }
    }
}
