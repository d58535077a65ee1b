mod subscription_check;
